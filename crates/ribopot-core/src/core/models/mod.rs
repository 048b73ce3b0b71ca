//! # Core Models Module
//!
//! Data structures representing RNA molecules for distance-statistics work.
//!
//! The representation is deliberately coarse: one residue is one nucleotide
//! identity plus a single representative coordinate (the C3' backbone atom).
//! That is all the statistical potential ever looks at.
//!
//! ## Key Components
//!
//! - [`residue`] - The nucleotide alphabet and the per-residue record
//! - [`structure`] - An ordered collection of residues forming one candidate
//!   or reference structure

pub mod residue;
pub mod structure;
