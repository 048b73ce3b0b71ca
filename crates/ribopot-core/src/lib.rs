//! # ribopot Core Library
//!
//! A knowledge-based statistical potential for RNA tertiary structure. The
//! library derives per-base-pair-type pseudo-energy profiles from the
//! pairwise C3'–C3' distance statistics of a reference set of solved
//! structures, and applies those profiles to candidate structures to estimate
//! a relative Gibbs free energy.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers with a strict dependency direction,
//! keeping the statistical machinery testable in isolation from any file
//! format or orchestration concern.
//!
//! - **[`core`]: The Foundation.** Stateless data models (nucleotides,
//!   residues, structures), the pure potential mathematics (distance binning,
//!   energy profiles, interpolation), and file I/O (PDB reading, profile
//!   persistence).
//!
//! - **[`engine`]: The Logic Core.** Pair enumeration under the
//!   sequence-separation and cutoff filters, histogram accumulation, the
//!   reference-state energy derivation, structure scoring, and progress
//!   reporting.
//!
//! - **[`workflows`]: The Public API.** The highest-level entry points that
//!   tie `core` and `engine` together into the complete procedures: training
//!   a potential from a directory of reference structures, and scoring a
//!   batch of candidate structures against a trained potential.

pub mod core;
pub mod engine;
pub mod workflows;
