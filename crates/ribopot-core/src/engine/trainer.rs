use crate::core::potential::PotentialError;
use crate::core::potential::histogram::PairHistogram;
use crate::core::potential::pair::BasePair;
use crate::core::potential::profile::{EnergyProfile, ProfileSet};
use tracing::debug;

/// Converts an aggregated observed histogram into one energy profile per
/// base-pair type.
///
/// The reference distribution for every pair type is the per-bin count
/// summed over all pair types: the shape the distances would follow if pair
/// identity were irrelevant. Each bin's energy is the Boltzmann-inversion
/// log-ratio of the pair-specific normalized frequency to the reference
/// normalized frequency,
///
/// ```text
/// E[p][k] = -ln( (obs[p][k] / T_p) / (ref[k] / T_ref) )
/// ```
///
/// Bins with no observations (or with an empty reference) have an undefined
/// ratio and receive the sentinel `max_energy`; defined energies are capped
/// at `max_energy` as well, so a single sparsely populated bin cannot blow
/// up a score. All ten pair types are emitted, even those never observed.
pub fn derive_profiles(
    histogram: &PairHistogram,
    max_energy: f64,
) -> Result<ProfileSet, PotentialError> {
    let binning = histogram.binning();
    let reference = histogram.reference_counts();
    let reference_total: u64 = reference.iter().sum();

    let mut set = ProfileSet::new(binning);
    for pair in BasePair::all() {
        let pair_total = histogram.total(pair);
        let energies: Vec<f64> = (0..binning.bins())
            .map(|k| {
                let observed = histogram.counts(pair).map_or(0, |row| row[k]);
                bin_energy(
                    observed,
                    pair_total,
                    reference[k],
                    reference_total,
                    max_energy,
                )
            })
            .collect();

        debug!(
            "Derived profile for {} from {} observations.",
            pair, pair_total
        );
        set.insert(pair, EnergyProfile::new(binning, energies)?)?;
    }
    Ok(set)
}

fn bin_energy(
    observed: u64,
    pair_total: u64,
    reference: u64,
    reference_total: u64,
    max_energy: f64,
) -> f64 {
    if observed == 0 || pair_total == 0 || reference == 0 || reference_total == 0 {
        return max_energy;
    }
    let observed_freq = observed as f64 / pair_total as f64;
    let reference_freq = reference as f64 / reference_total as f64;
    (-(observed_freq / reference_freq).ln()).min(max_energy)
}
