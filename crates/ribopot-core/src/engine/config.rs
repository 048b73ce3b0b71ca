use crate::core::potential::PotentialError;
use crate::core::potential::binning::DistanceBinning;
use crate::engine::enumerate::PairFilter;
use serde::{Deserialize, Serialize};

/// The tunable parameters of the statistical potential.
///
/// One value of this type describes both how a potential is trained and how
/// candidates are scored against it; scoring must use the same parameters the
/// profiles were trained with, so the CLI threads a single config through
/// both paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PotentialConfig {
    /// Inclusive lower bound on sequence separation |i - j|. Pairs closer in
    /// chain order are dominated by covalent geometry and excluded.
    pub min_separation: usize,
    /// Upper distance cutoff in Angstroms (exclusive).
    pub cutoff: f64,
    /// Number of equal-width distance bins covering [0, cutoff).
    pub bins: usize,
    /// Sentinel and cap energy for bins with no observations.
    pub max_energy: f64,
}

impl Default for PotentialConfig {
    fn default() -> Self {
        Self {
            min_separation: 3,
            cutoff: DistanceBinning::DEFAULT_CUTOFF,
            bins: DistanceBinning::DEFAULT_BINS,
            max_energy: 10.0,
        }
    }
}

impl PotentialConfig {
    /// Validates the distance parameters and builds the shared binning.
    pub fn binning(&self) -> Result<DistanceBinning, PotentialError> {
        DistanceBinning::new(self.cutoff, self.bins)
    }

    /// The pair filter applied during both training and scoring.
    pub fn pair_filter(&self) -> PairFilter {
        PairFilter {
            min_separation: self.min_separation,
            cutoff: self.cutoff,
        }
    }
}
