//! # Workflows Module
//!
//! The high-level entry points of the library. Each workflow ties the core
//! models, the I/O layer, and the engine together into one complete
//! procedure with progress reporting and fault isolation.
//!
//! - **Training** ([`train`]) - Builds a full profile set from a directory
//!   of reference PDB structures.
//! - **Scoring** ([`score`]) - Estimates the energy of every candidate under
//!   a base directory against a trained profile set.

pub mod score;
pub mod train;
