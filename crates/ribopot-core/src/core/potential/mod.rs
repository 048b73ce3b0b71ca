//! # Potential Mathematics Module
//!
//! The pure numerical pieces of the statistical potential: pair-type
//! canonicalization, distance discretization, count histograms, and the
//! energy profiles with their interpolation rule.
//!
//! ## Key Components
//!
//! - [`pair`] - The canonical unordered base-pair category ([`pair::BasePair`])
//! - [`binning`] - Equal-width half-open distance bins over `[0, cutoff)`
//! - [`histogram`] - Per-pair-type observed counts with commutative merging
//! - [`profile`] - Per-pair-type energies over bins, linear interpolation
//!   between bin centers, and the read-only trained profile set
//!
//! Nothing here performs I/O or owns a structure; callers feed distances in
//! and read energies out.

pub mod binning;
pub mod histogram;
pub mod pair;
pub mod profile;

use thiserror::Error;

/// Contract violations in the potential mathematics.
///
/// These indicate a caller bug (the enumerator is responsible for
/// pre-filtering distances), not a data problem, and are therefore surfaced
/// as errors rather than silently absorbed.
#[derive(Debug, Error, PartialEq)]
pub enum PotentialError {
    #[error("distance {value} is outside the binnable domain [0, {cutoff})")]
    DistanceOutOfRange { value: f64, cutoff: f64 },

    #[error("negative distance {value} passed to interpolation")]
    NegativeDistance { value: f64 },

    #[error("profile has {actual} energies but the binning defines {expected} bins")]
    BinCountMismatch { expected: usize, actual: usize },

    #[error("binning requires a positive cutoff and at least one bin (cutoff: {cutoff}, bins: {bins})")]
    InvalidBinning { cutoff: f64, bins: usize },
}
