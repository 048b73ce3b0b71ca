use super::PotentialError;
use super::binning::DistanceBinning;
use super::pair::BasePair;
use std::collections::BTreeMap;

/// The pseudo-energy curve for one base-pair type.
///
/// Energies are samples at the bin centers of the owning binning; values in
/// between come from [`EnergyProfile::interpolate`]. Profiles are created by
/// training or loaded from disk, and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyProfile {
    binning: DistanceBinning,
    energies: Vec<f64>,
}

impl EnergyProfile {
    pub fn new(binning: DistanceBinning, energies: Vec<f64>) -> Result<Self, PotentialError> {
        if energies.len() != binning.bins() {
            return Err(PotentialError::BinCountMismatch {
                expected: binning.bins(),
                actual: energies.len(),
            });
        }
        Ok(Self { binning, energies })
    }

    /// A profile holding the same energy in every bin. Interpolation over a
    /// uniform profile returns that energy for every distance.
    pub fn uniform(binning: DistanceBinning, energy: f64) -> Self {
        Self {
            energies: vec![energy; binning.bins()],
            binning,
        }
    }

    pub fn binning(&self) -> DistanceBinning {
        self.binning
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    /// The smoothed energy at an arbitrary distance.
    ///
    /// Linear interpolation between the two adjacent bin centers, with flat
    /// extrapolation outside the first and last center (no bin exists beyond
    /// the range, so the edge value is held). Distances at or above the
    /// cutoff never reach this method; the enumerator excludes them.
    pub fn interpolate(&self, distance: f64) -> Result<f64, PotentialError> {
        if !(distance >= 0.0) {
            return Err(PotentialError::NegativeDistance { value: distance });
        }

        let position = distance / self.binning.width() - 0.5;
        let k0 = position.floor();
        if k0 < 0.0 {
            return Ok(self.energies[0]);
        }
        let k0 = k0 as usize;
        if k0 + 1 >= self.energies.len() {
            return Ok(self.energies[self.energies.len() - 1]);
        }

        let t = position - k0 as f64;
        Ok((1.0 - t) * self.energies[k0] + t * self.energies[k0 + 1])
    }
}

/// A complete trained potential: one [`EnergyProfile`] per base-pair type,
/// all sharing one binning.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSet {
    binning: DistanceBinning,
    profiles: BTreeMap<BasePair, EnergyProfile>,
}

impl ProfileSet {
    pub fn new(binning: DistanceBinning) -> Self {
        Self {
            binning,
            profiles: BTreeMap::new(),
        }
    }

    pub fn binning(&self) -> DistanceBinning {
        self.binning
    }

    /// Inserts a profile for a pair type. The profile's binning must match
    /// the set's.
    pub fn insert(&mut self, pair: BasePair, profile: EnergyProfile) -> Result<(), PotentialError> {
        if profile.binning() != self.binning {
            return Err(PotentialError::BinCountMismatch {
                expected: self.binning.bins(),
                actual: profile.binning().bins(),
            });
        }
        self.profiles.insert(pair, profile);
        Ok(())
    }

    pub fn get(&self, pair: BasePair) -> Option<&EnergyProfile> {
        self.profiles.get(&pair)
    }

    /// Profiles in canonical pair order.
    pub fn iter(&self) -> impl Iterator<Item = (BasePair, &EnergyProfile)> {
        self.profiles.iter().map(|(pair, profile)| (*pair, profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
