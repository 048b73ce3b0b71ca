use crate::core::models::residue::Nucleotide;
use std::fmt;
use std::str::FromStr;

/// The statistical category formed by an unordered pair of nucleotides.
///
/// `(A, U)` and `(U, A)` are the same category; the constructor is the single
/// canonicalization point, so the trainer and the scorer can never disagree
/// on the key for a pair. Ten distinct values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BasePair {
    first: Nucleotide,
    second: Nucleotide,
}

impl BasePair {
    /// Builds the canonical pair for two nucleotides, in either order.
    pub fn new(a: Nucleotide, b: Nucleotide) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> Nucleotide {
        self.first
    }

    pub fn second(&self) -> Nucleotide {
        self.second
    }

    /// The two-letter label used for file names and reports, e.g. `"AU"`.
    pub fn label(&self) -> String {
        format!("{}{}", self.first.code(), self.second.code())
    }

    /// All ten canonical pairs, in label order.
    pub fn all() -> impl Iterator<Item = BasePair> {
        Nucleotide::ALL.into_iter().enumerate().flat_map(|(i, a)| {
            Nucleotide::ALL
                .into_iter()
                .skip(i)
                .map(move |b| BasePair::new(a, b))
        })
    }
}

impl fmt::Display for BasePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first.code(), self.second.code())
    }
}

impl FromStr for BasePair {
    type Err = ();

    /// Parses a two-letter label such as `"GU"`. Order-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(());
        };
        let a = Nucleotide::from_residue_name(&a.to_string()).ok_or(())?;
        let b = Nucleotide::from_residue_name(&b.to_string()).ok_or(())?;
        Ok(BasePair::new(a, b))
    }
}
