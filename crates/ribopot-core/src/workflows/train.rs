use crate::core::io::pdb::{self, StructureClass};
use crate::core::potential::histogram::PairHistogram;
use crate::core::potential::profile::ProfileSet;
use crate::engine::config::PotentialConfig;
use crate::engine::enumerate::pair_distances;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::trainer;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The result of one training run.
#[derive(Debug)]
pub struct TrainingOutcome {
    /// One trained profile per base-pair type.
    pub profiles: ProfileSet,
    /// Structures that contributed observations.
    pub structures_used: usize,
    /// Directory entries skipped as non-structures.
    pub entries_skipped: usize,
    /// Total qualifying pairs observed across the reference set.
    pub pairs_observed: u64,
}

/// Trains a potential from every `.pdb` file in `input_dir`.
///
/// Each structure is parsed, enumerated, and binned into a worker-private
/// histogram; the private histograms are merged in a final reduction, so no
/// shared mutable state exists across structures. Non-structure entries are
/// skipped with a log line and never abort the run. The profile set is only
/// assembled after the full aggregation completes.
#[instrument(skip_all, name = "training_workflow")]
pub fn run(
    input_dir: &Path,
    config: &PotentialConfig,
    reporter: &ProgressReporter,
) -> Result<TrainingOutcome, EngineError> {
    let binning = config.binning()?;
    let filter = config.pair_filter();

    reporter.report(Progress::StageStart {
        name: "Collecting reference structures",
    });
    let entries = list_entries(input_dir)?;
    info!(
        "Found {} entries under '{}'.",
        entries.len(),
        input_dir.display()
    );
    reporter.report(Progress::StageFinish);

    reporter.report(Progress::StageStart {
        name: "Accumulating distance statistics",
    });
    reporter.report(Progress::BatchStart {
        total: entries.len() as u64,
    });

    let per_structure = |path: &PathBuf| -> Option<PairHistogram> {
        let result = match pdb::classify(path) {
            StructureClass::Structure(structure) => {
                let mut histogram = PairHistogram::new(binning);
                for (pair, distance) in pair_distances(&structure, filter) {
                    // The enumerator's cutoff matches the binning domain, so
                    // recording cannot fail; drop the pair rather than poison
                    // the whole structure if it somehow does.
                    if histogram.record(pair, distance).is_err() {
                        warn!(
                            "Dropped out-of-domain distance {:.3} in '{}'.",
                            distance, structure.id
                        );
                    }
                }
                Some(histogram)
            }
            StructureClass::NotAStructure => {
                info!("Skipping non-structure entry '{}'.", path.display());
                None
            }
        };
        reporter.report(Progress::BatchTick);
        result
    };

    #[cfg(feature = "parallel")]
    let partials: Vec<Option<PairHistogram>> = entries.par_iter().map(per_structure).collect();
    #[cfg(not(feature = "parallel"))]
    let partials: Vec<Option<PairHistogram>> = entries.iter().map(per_structure).collect();

    reporter.report(Progress::BatchFinish);
    reporter.report(Progress::StageFinish);

    let structures_used = partials.iter().filter(|p| p.is_some()).count();
    let entries_skipped = partials.len() - structures_used;
    let histogram = partials
        .into_iter()
        .flatten()
        .fold(PairHistogram::new(binning), PairHistogram::merge);

    if structures_used == 0 {
        return Err(EngineError::EmptyTrainingSet {
            dir: input_dir.to_path_buf(),
        });
    }

    reporter.report(Progress::StageStart {
        name: "Deriving energy profiles",
    });
    let pairs_observed = histogram.grand_total();
    let profiles = trainer::derive_profiles(&histogram, config.max_energy)?;
    reporter.report(Progress::StageFinish);

    info!(
        "Trained {} profiles from {} structures ({} pairs; {} entries skipped).",
        profiles.len(),
        structures_used,
        pairs_observed,
        entries_skipped
    );

    Ok(TrainingOutcome {
        profiles,
        structures_used,
        entries_skipped,
        pairs_observed,
    })
}

fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, EngineError> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| EngineError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| EngineError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}
