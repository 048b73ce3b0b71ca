use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

/// The four standard ribonucleotides.
///
/// This is a closed alphabet: anything else encountered in an input file
/// (modified bases, ions, ligands) is outside the statistical model and is
/// skipped at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nucleotide {
    Adenine,
    Cytosine,
    Guanine,
    Uracil,
}

/// Residue-name lookup for the PDB names this model accepts.
static NUCLEOTIDE_BY_NAME: phf::Map<&'static str, Nucleotide> = phf::phf_map! {
    "A" => Nucleotide::Adenine,
    "C" => Nucleotide::Cytosine,
    "G" => Nucleotide::Guanine,
    "U" => Nucleotide::Uracil,
};

impl Nucleotide {
    /// All nucleotides in canonical (alphabetical) order.
    pub const ALL: [Nucleotide; 4] = [
        Nucleotide::Adenine,
        Nucleotide::Cytosine,
        Nucleotide::Guanine,
        Nucleotide::Uracil,
    ];

    /// Looks up a PDB residue name, returning `None` for anything outside
    /// the closed alphabet.
    pub fn from_residue_name(name: &str) -> Option<Self> {
        NUCLEOTIDE_BY_NAME.get(name).copied()
    }

    /// The one-letter code.
    pub fn code(&self) -> char {
        match self {
            Nucleotide::Adenine => 'A',
            Nucleotide::Cytosine => 'C',
            Nucleotide::Guanine => 'G',
            Nucleotide::Uracil => 'U',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Nucleotide {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Nucleotide::from_residue_name(s.trim()).ok_or(())
    }
}

/// One residue of an RNA chain, reduced to what the potential needs: its
/// identity, its place in the chain, and one representative coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    /// The nucleotide identity.
    pub nucleotide: Nucleotide,
    /// The chain this residue belongs to.
    pub chain_id: char,
    /// Residue sequence number from the source file. Strictly increasing
    /// within a chain; differences of these numbers define sequence
    /// separation.
    pub seq_index: isize,
    /// The C3' atom position in Angstroms.
    pub position: Point3<f64>,
}

impl Residue {
    pub fn new(nucleotide: Nucleotide, chain_id: char, seq_index: isize, position: Point3<f64>) -> Self {
        Self {
            nucleotide,
            chain_id,
            seq_index,
            position,
        }
    }

    /// Euclidean distance to another residue's representative atom.
    pub fn distance_to(&self, other: &Residue) -> f64 {
        (self.position - other.position).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_residue_name_accepts_the_four_standard_bases() {
        assert_eq!(Nucleotide::from_residue_name("A"), Some(Nucleotide::Adenine));
        assert_eq!(Nucleotide::from_residue_name("C"), Some(Nucleotide::Cytosine));
        assert_eq!(Nucleotide::from_residue_name("G"), Some(Nucleotide::Guanine));
        assert_eq!(Nucleotide::from_residue_name("U"), Some(Nucleotide::Uracil));
    }

    #[test]
    fn from_residue_name_rejects_everything_else() {
        assert_eq!(Nucleotide::from_residue_name("T"), None);
        assert_eq!(Nucleotide::from_residue_name("PSU"), None);
        assert_eq!(Nucleotide::from_residue_name("HOH"), None);
        assert_eq!(Nucleotide::from_residue_name(""), None);
        assert_eq!(Nucleotide::from_residue_name("a"), None);
    }

    #[test]
    fn from_str_trims_whitespace() {
        assert_eq!(" G ".parse::<Nucleotide>(), Ok(Nucleotide::Guanine));
        assert_eq!("X".parse::<Nucleotide>(), Err(()));
    }

    #[test]
    fn all_is_sorted_and_complete() {
        let mut sorted = Nucleotide::ALL;
        sorted.sort();
        assert_eq!(sorted, Nucleotide::ALL);
        assert_eq!(Nucleotide::ALL.len(), 4);
    }

    #[test]
    fn display_matches_one_letter_code() {
        assert_eq!(Nucleotide::Adenine.to_string(), "A");
        assert_eq!(Nucleotide::Uracil.to_string(), "U");
    }

    #[test]
    fn distance_to_is_euclidean_and_symmetric() {
        let a = Residue::new(Nucleotide::Adenine, 'A', 1, Point3::new(0.0, 0.0, 0.0));
        let b = Residue::new(Nucleotide::Uracil, 'A', 5, Point3::new(3.0, 4.0, 0.0));
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
    }
}
