use crate::core::io::pdb::{self, StructureClass};
use crate::core::potential::profile::ProfileSet;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scorer::score_structure;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One scored entry of a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    /// The entry's name under the base directory.
    pub id: String,
    /// Estimated relative free energy; exactly 0.0 for non-structures.
    pub energy: f64,
    /// Structures that contributed to the energy (0 for non-structures,
    /// more than 1 for a directory of models).
    pub structures: usize,
}

/// Scores every immediate entry of `base_dir` against a trained potential.
///
/// A `.pdb` file entry is one candidate. A subdirectory entry is one
/// candidate batch whose energy is the mean over its `.pdb` members (an
/// RNA-Puzzles-style layout: one directory of models per puzzle). Entries
/// that are neither (stray metadata files, empty directories) report
/// exactly 0.0 rather than failing the run. Results come back sorted by id.
#[instrument(skip_all, name = "scoring_workflow")]
pub fn run(
    base_dir: &Path,
    profiles: &ProfileSet,
    min_separation: usize,
    reporter: &ProgressReporter,
) -> Result<Vec<ScoredEntry>, EngineError> {
    let mut entries = list_entries(base_dir)?;
    entries.sort();

    reporter.report(Progress::StageStart {
        name: "Scoring candidates",
    });
    reporter.report(Progress::BatchStart {
        total: entries.len() as u64,
    });

    let score_entry = |path: &PathBuf| -> Result<ScoredEntry, EngineError> {
        let result = if path.is_dir() {
            score_batch_dir(path, profiles, min_separation)
        } else {
            score_single(path, profiles, min_separation)
        };
        reporter.report(Progress::BatchTick);
        result
    };

    #[cfg(feature = "parallel")]
    let scored: Result<Vec<ScoredEntry>, EngineError> =
        entries.par_iter().map(score_entry).collect();
    #[cfg(not(feature = "parallel"))]
    let scored: Result<Vec<ScoredEntry>, EngineError> = entries.iter().map(score_entry).collect();
    let mut scored = scored?;

    reporter.report(Progress::BatchFinish);
    reporter.report(Progress::StageFinish);

    scored.sort_by(|a, b| a.id.cmp(&b.id));
    info!("Scored {} entries under '{}'.", scored.len(), base_dir.display());
    Ok(scored)
}

fn score_single(
    path: &Path,
    profiles: &ProfileSet,
    min_separation: usize,
) -> Result<ScoredEntry, EngineError> {
    let id = entry_name(path);
    match pdb::classify(path) {
        StructureClass::Structure(structure) => {
            let energy = score_structure(&structure, profiles, min_separation)?;
            Ok(ScoredEntry {
                id,
                energy,
                structures: 1,
            })
        }
        StructureClass::NotAStructure => Ok(ScoredEntry {
            id,
            energy: 0.0,
            structures: 0,
        }),
    }
}

/// Mean energy over the `.pdb` members of one candidate directory. A
/// directory without a single structure scores exactly 0.0.
fn score_batch_dir(
    dir: &Path,
    profiles: &ProfileSet,
    min_separation: usize,
) -> Result<ScoredEntry, EngineError> {
    let id = entry_name(dir);
    let mut members = list_entries(dir)?;
    members.sort();

    let mut total = 0.0;
    let mut structures = 0;
    for member in members {
        if let StructureClass::Structure(structure) = pdb::classify(&member) {
            total += score_structure(&structure, profiles, min_separation)?;
            structures += 1;
        }
    }

    let energy = if structures > 0 {
        total / structures as f64
    } else {
        0.0
    };
    Ok(ScoredEntry {
        id,
        energy,
        structures,
    })
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, EngineError> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| EngineError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;
    read_dir
        .map(|entry| {
            entry.map(|e| e.path()).map_err(|e| EngineError::Io {
                path: dir.to_path_buf(),
                source: e,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::potential::binning::DistanceBinning;
    use crate::core::potential::pair::BasePair;
    use crate::core::potential::profile::EnergyProfile;
    use std::fs;
    use tempfile::tempdir;

    const TOLERANCE: f64 = 1e-9;

    fn uniform_set(energy: f64) -> ProfileSet {
        let binning = DistanceBinning::new(20.0, 19).unwrap();
        let mut set = ProfileSet::new(binning);
        for pair in BasePair::all() {
            set.insert(pair, EnergyProfile::uniform(binning, energy))
                .unwrap();
        }
        set
    }

    /// Five residues 2.0 A apart; with min_separation 4 exactly one pair
    /// qualifies.
    fn five_residue_pdb() -> String {
        let names = ["A", "U", "G", "C", "G"];
        let mut text = String::new();
        for (i, name) in names.iter().enumerate() {
            text.push_str(&format!(
                "ATOM  {:>5}  C3'   {} A{:>4}    {:>8.3}{:>8.3}{:>8.3}  1.00  0.00           C\n",
                i + 1,
                name,
                i + 1,
                i as f64 * 2.0,
                0.0,
                0.0
            ));
        }
        text
    }

    #[test]
    fn file_entries_score_their_own_energy() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("model.pdb"), five_residue_pdb()).unwrap();

        let profiles = uniform_set(-1.0);
        let scored = run(dir.path(), &profiles, 4, &ProgressReporter::new()).unwrap();

        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].id, "model.pdb");
        assert_eq!(scored[0].structures, 1);
        assert!((scored[0].energy - (-1.0)).abs() < TOLERANCE);
    }

    #[test]
    fn directory_entries_score_the_mean_of_their_models() {
        let dir = tempdir().unwrap();
        let puzzle = dir.path().join("puzzle-01");
        fs::create_dir(&puzzle).unwrap();
        fs::write(puzzle.join("model1.pdb"), five_residue_pdb()).unwrap();
        fs::write(puzzle.join("model2.pdb"), five_residue_pdb()).unwrap();
        fs::write(puzzle.join("notes.txt"), "metadata\n").unwrap();

        let profiles = uniform_set(-1.0);
        let scored = run(dir.path(), &profiles, 4, &ProgressReporter::new()).unwrap();

        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].id, "puzzle-01");
        assert_eq!(scored[0].structures, 2);
        // Both models score -1.0; the mean is -1.0.
        assert!((scored[0].energy - (-1.0)).abs() < TOLERANCE);
    }

    #[test]
    fn non_structure_entries_score_exactly_zero() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "about this dataset\n").unwrap();
        fs::create_dir(dir.path().join("metadata")).unwrap();
        fs::write(
            dir.path().join("metadata").join("info.json"),
            "{\"k\": 1}\n",
        )
        .unwrap();

        let profiles = uniform_set(-1.0);
        let scored = run(dir.path(), &profiles, 4, &ProgressReporter::new()).unwrap();

        assert_eq!(scored.len(), 2);
        for entry in &scored {
            assert_eq!(entry.energy, 0.0);
            assert_eq!(entry.structures, 0);
        }
    }

    #[test]
    fn results_are_sorted_by_id() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("zzz.pdb"), five_residue_pdb()).unwrap();
        fs::write(dir.path().join("aaa.pdb"), five_residue_pdb()).unwrap();
        fs::write(dir.path().join("mmm.pdb"), five_residue_pdb()).unwrap();

        let profiles = uniform_set(-1.0);
        let scored = run(dir.path(), &profiles, 4, &ProgressReporter::new()).unwrap();
        let ids: Vec<&str> = scored.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["aaa.pdb", "mmm.pdb", "zzz.pdb"]);
    }

    #[test]
    fn unreadable_base_directory_is_fatal() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let profiles = uniform_set(-1.0);
        let result = run(&missing, &profiles, 4, &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::Io { .. })));
    }

    #[test]
    fn mixed_energies_average_within_a_directory() {
        let dir = tempdir().unwrap();
        let puzzle = dir.path().join("mixed");
        fs::create_dir(&puzzle).unwrap();
        // One five-residue model (one qualifying pair) and one model with no
        // qualifying pairs at all.
        fs::write(puzzle.join("full.pdb"), five_residue_pdb()).unwrap();
        fs::write(
            puzzle.join("short.pdb"),
            "ATOM      1  C3'   A A   1       0.000   0.000   0.000  1.00  0.00           C\n",
        )
        .unwrap();

        let profiles = uniform_set(-1.0);
        let scored = run(dir.path(), &profiles, 4, &ProgressReporter::new()).unwrap();
        assert_eq!(scored[0].structures, 2);
        // (-1.0 + 0.0) / 2
        assert!((scored[0].energy - (-0.5)).abs() < TOLERANCE);
    }
}
