use crate::core::models::residue::{Nucleotide, Residue};
use crate::core::models::structure::RnaStructure;
use nalgebra::Point3;
use std::io::{self, BufRead, BufReader};
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
}

/// The outcome of classifying one filesystem entry as a scoring or training
/// input.
///
/// Both the training and the scoring path go through this single tagged
/// classification, so "is this a structure" is decided in exactly one place.
/// Directories, non-`.pdb` files, unreadable files, and files that fail to
/// parse are all `NotAStructure`; batch runs treat them as contributing
/// nothing rather than as failures.
#[derive(Debug)]
pub enum StructureClass {
    Structure(RnaStructure),
    NotAStructure,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Reads residues from PDB-format text.
///
/// Only `ATOM` records for the C3' backbone atom of the four standard
/// ribonucleotides are kept; every residue is reduced to that single
/// coordinate. Records for other atoms, other residue names, and non-ATOM
/// lines are skipped. Malformed numeric fields on a line that should be kept
/// are an error carrying the 1-based line number.
pub fn read_from(reader: &mut impl BufRead) -> Result<Vec<Residue>, PdbError> {
    let mut residues = Vec::new();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        if !line.starts_with("ATOM") {
            continue;
        }
        let atom_name = slice_and_trim(&line, 12, 16);
        if atom_name != "C3'" {
            continue;
        }

        let res_name = slice_and_trim(&line, 17, 20);
        let Some(nucleotide) = Nucleotide::from_residue_name(res_name) else {
            continue;
        };

        let chain_id = slice_and_trim(&line, 21, 22).chars().next().unwrap_or('A');
        let seq_str = slice_and_trim(&line, 22, 26);
        let seq_index: isize = seq_str.parse().map_err(|_| PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::InvalidInt {
                columns: "23-26".into(),
                value: seq_str.into(),
            },
        })?;

        let mut coords = [0.0; 3];
        for (slot, (start, end)) in coords.iter_mut().zip([(30, 38), (38, 46), (46, 54)]) {
            let field = slice_and_trim(&line, start, end);
            *slot = field.parse().map_err(|_| PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::InvalidFloat {
                    columns: format!("{}-{}", start + 1, end),
                    value: field.into(),
                },
            })?;
        }

        residues.push(Residue::new(
            nucleotide,
            chain_id,
            seq_index,
            Point3::new(coords[0], coords[1], coords[2]),
        ));
    }

    Ok(residues)
}

/// Reads one structure file, using the file stem as the structure id.
pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<RnaStructure, PdbError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let residues = read_from(&mut reader)?;
    Ok(RnaStructure::new(file_stem(path), residues))
}

/// Classifies a filesystem entry, parsing it if it looks like a structure.
pub fn classify<P: AsRef<Path>>(path: P) -> StructureClass {
    let path = path.as_ref();
    if !path.is_file() {
        return StructureClass::NotAStructure;
    }
    let is_pdb = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdb"));
    if !is_pdb {
        return StructureClass::NotAStructure;
    }
    match read_from_path(path) {
        Ok(structure) => StructureClass::Structure(structure),
        Err(e) => {
            warn!("Skipping '{}': {}", path.display(), e);
            StructureClass::NotAStructure
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
