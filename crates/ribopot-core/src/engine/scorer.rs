use crate::core::models::structure::RnaStructure;
use crate::core::potential::profile::ProfileSet;
use crate::engine::enumerate::{PairFilter, pair_distances};
use crate::engine::error::EngineError;
use tracing::trace;

/// Sums the interpolated profile energies over every qualifying residue pair
/// of one structure.
///
/// The cutoff comes from the profile set's own binning, so a distance that
/// passed the filter always lies inside the interpolation domain. A pair
/// type with no profile in the set contributes exactly zero; this keeps
/// totals well defined when a sparsely trained potential meets an unseen
/// pair type. A structure with no qualifying pairs scores exactly 0.0.
pub fn score_structure(
    structure: &RnaStructure,
    profiles: &ProfileSet,
    min_separation: usize,
) -> Result<f64, EngineError> {
    let filter = PairFilter {
        min_separation,
        cutoff: profiles.binning().cutoff(),
    };

    let mut total = 0.0;
    for (pair, distance) in pair_distances(structure, filter) {
        let Some(profile) = profiles.get(pair) else {
            continue;
        };
        total += profile.interpolate(distance)?;
    }

    trace!("Scored '{}' at {:.4}.", structure.id, total);
    Ok(total)
}
