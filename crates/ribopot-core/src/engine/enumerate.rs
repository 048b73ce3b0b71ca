use crate::core::models::structure::RnaStructure;
use crate::core::potential::pair::BasePair;
use itertools::Itertools;

/// The admission filters for a residue pair.
///
/// Both training and scoring run the same filter; the statistics are only
/// meaningful when candidate distances are drawn from the same population
/// the profiles were trained on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairFilter {
    /// Inclusive lower bound on sequence separation |i - j|.
    pub min_separation: usize,
    /// Exclusive upper bound on pair distance in Angstroms.
    pub cutoff: f64,
}

impl Default for PairFilter {
    fn default() -> Self {
        Self {
            min_separation: 3,
            cutoff: 20.0,
        }
    }
}

/// Lazily yields `(BasePair, distance)` for every qualifying unordered
/// residue pair of one structure.
///
/// A pair qualifies when both residues share a chain, their sequence
/// separation is at least `min_separation`, and their distance is strictly
/// below `cutoff`. Each unordered pair is visited once, so nothing is double
/// counted; failing pairs are skipped silently. A structure too short to
/// contain any qualifying pair simply yields nothing.
pub fn pair_distances<'a>(
    structure: &'a RnaStructure,
    filter: PairFilter,
) -> impl Iterator<Item = (BasePair, f64)> + 'a {
    structure
        .residues()
        .iter()
        .tuple_combinations()
        .filter_map(move |(a, b)| {
            if a.chain_id != b.chain_id {
                return None;
            }
            if a.seq_index.abs_diff(b.seq_index) < filter.min_separation {
                return None;
            }
            let distance = a.distance_to(b);
            if distance >= filter.cutoff {
                return None;
            }
            Some((BasePair::new(a.nucleotide, b.nucleotide), distance))
        })
}
