use crate::core::potential::PotentialError;
use crate::core::potential::binning::DistanceBinning;
use crate::core::potential::pair::BasePair;
use crate::core::potential::profile::{EnergyProfile, ProfileSet};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed energy on line {line} of '{path}' (value: '{value}')", path = path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("Profile '{path}' does not match the expected binning: {source}", path = path.display())]
    Shape {
        path: PathBuf,
        #[source]
        source: PotentialError,
    },
    #[error("No profile files found in '{dir}'", dir = dir.display())]
    NoProfiles { dir: PathBuf },
}

fn pair_file_name(pair: BasePair) -> String {
    format!("{}.txt", pair.label())
}

/// Writes one `<PAIR>.txt` file per profile into `dir`, creating the
/// directory if needed.
///
/// Energies are written one per line with the shortest f64 representation
/// that round-trips exactly, so a save → load cycle reproduces the set.
/// Any failure is fatal for the whole operation; a partially written profile
/// set must not be left looking usable, so callers run this only after
/// training fully completed.
pub fn save_profiles(profiles: &ProfileSet, dir: &Path) -> Result<(), ProfileStoreError> {
    fs::create_dir_all(dir).map_err(|e| ProfileStoreError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for (pair, profile) in profiles.iter() {
        let path = dir.join(pair_file_name(pair));
        let io_err = |e| ProfileStoreError::Io {
            path: path.clone(),
            source: e,
        };

        let file = File::create(&path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        for energy in profile.energies() {
            writeln!(writer, "{}", energy).map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;
    }

    Ok(())
}

/// Loads every pair-type profile present in `dir` against the given binning.
///
/// A missing pair file is tolerated with a warning (the scorer's
/// missing-profile policy covers it); a directory containing no pair file at
/// all is an error, since scoring against nothing would silently produce
/// zeros for everything.
pub fn load_profiles(dir: &Path, binning: DistanceBinning) -> Result<ProfileSet, ProfileStoreError> {
    let mut set = ProfileSet::new(binning);

    for pair in BasePair::all() {
        let path = dir.join(pair_file_name(pair));
        if !path.is_file() {
            warn!("Profile file '{}' not found; pair {} will contribute zero.", path.display(), pair);
            continue;
        }

        let file = File::open(&path).map_err(|e| ProfileStoreError::Io {
            path: path.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        let mut energies = Vec::with_capacity(binning.bins());
        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res.map_err(|e| ProfileStoreError::Io {
                path: path.clone(),
                source: e,
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let energy: f64 = trimmed.parse().map_err(|_| ProfileStoreError::Malformed {
                path: path.clone(),
                line: line_num + 1,
                value: trimmed.to_string(),
            })?;
            energies.push(energy);
        }

        let profile =
            EnergyProfile::new(binning, energies).map_err(|e| ProfileStoreError::Shape {
                path: path.clone(),
                source: e,
            })?;
        set.insert(pair, profile).map_err(|e| ProfileStoreError::Shape {
            path: path.clone(),
            source: e,
        })?;
    }

    if set.is_empty() {
        return Err(ProfileStoreError::NoProfiles {
            dir: dir.to_path_buf(),
        });
    }

    Ok(set)
}
