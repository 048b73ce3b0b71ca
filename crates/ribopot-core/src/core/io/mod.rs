//! Provides input/output functionality for the statistical potential.
//!
//! Two formats are handled: PDB-format structure files (read-only, reduced
//! to per-residue C3' coordinates) and the flat profile files a trained
//! potential is persisted as.

pub mod pdb;
pub mod profiles;
