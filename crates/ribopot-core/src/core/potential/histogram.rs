use super::PotentialError;
use super::binning::DistanceBinning;
use super::pair::BasePair;
use std::collections::BTreeMap;

/// Observed distance counts, per base-pair type and bin, for one training
/// run (or one worker's share of it).
///
/// Merging is plain per-cell addition, so per-structure histograms built on
/// worker threads can be reduced into a single accumulator in any order.
#[derive(Debug, Clone, PartialEq)]
pub struct PairHistogram {
    binning: DistanceBinning,
    counts: BTreeMap<BasePair, Vec<u64>>,
}

impl PairHistogram {
    pub fn new(binning: DistanceBinning) -> Self {
        Self {
            binning,
            counts: BTreeMap::new(),
        }
    }

    pub fn binning(&self) -> DistanceBinning {
        self.binning
    }

    /// Bins a distance and increments the cell for the given pair type.
    ///
    /// The distance must already satisfy the enumerator's cutoff filter.
    pub fn record(&mut self, pair: BasePair, distance: f64) -> Result<(), PotentialError> {
        let bin = self.binning.index_of(distance)?;
        let row = self
            .counts
            .entry(pair)
            .or_insert_with(|| vec![0; self.binning.bins()]);
        row[bin] += 1;
        Ok(())
    }

    /// Adds every cell of `other` into `self`. Commutative and associative,
    /// which is what makes the final map-reduce merge order-independent.
    pub fn merge(mut self, other: PairHistogram) -> Self {
        debug_assert_eq!(self.binning, other.binning);
        for (pair, bins) in other.counts {
            let row = self
                .counts
                .entry(pair)
                .or_insert_with(|| vec![0; self.binning.bins()]);
            for (cell, count) in row.iter_mut().zip(bins) {
                *cell += count;
            }
        }
        self
    }

    /// The counts row for one pair type, if any pair of that type was seen.
    pub fn counts(&self, pair: BasePair) -> Option<&[u64]> {
        self.counts.get(&pair).map(Vec::as_slice)
    }

    /// Total observations for one pair type across all bins.
    pub fn total(&self, pair: BasePair) -> u64 {
        self.counts(pair).map_or(0, |row| row.iter().sum())
    }

    /// The reference histogram: per-bin counts summed over all pair types.
    /// This is the expected shape of the distance distribution if pair
    /// identity were irrelevant.
    pub fn reference_counts(&self) -> Vec<u64> {
        let mut reference = vec![0; self.binning.bins()];
        for row in self.counts.values() {
            for (cell, count) in reference.iter_mut().zip(row) {
                *cell += count;
            }
        }
        reference
    }

    /// Total observations across all pair types and bins.
    pub fn grand_total(&self) -> u64 {
        self.counts.values().flatten().sum()
    }
}
