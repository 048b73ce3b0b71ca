use super::residue::Residue;

/// One RNA structure: an identifier and the ordered residues the reader
/// extracted from it.
///
/// Residues appear in file order. An empty residue list is a valid value;
/// it is how degenerate inputs (non-structure files, structures with no
/// standard nucleotides) flow through the pipeline and contribute nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct RnaStructure {
    /// Identifier for reporting, normally the source file stem.
    pub id: String,
    residues: Vec<Residue>,
}

impl RnaStructure {
    pub fn new(id: impl Into<String>, residues: Vec<Residue>) -> Self {
        Self {
            id: id.into(),
            residues,
        }
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::Nucleotide;
    use nalgebra::Point3;

    #[test]
    fn new_structure_keeps_residue_order() {
        let residues = vec![
            Residue::new(Nucleotide::Guanine, 'A', 1, Point3::new(0.0, 0.0, 0.0)),
            Residue::new(Nucleotide::Cytosine, 'A', 2, Point3::new(5.0, 0.0, 0.0)),
        ];
        let structure = RnaStructure::new("1abc", residues.clone());
        assert_eq!(structure.id, "1abc");
        assert_eq!(structure.residues(), residues.as_slice());
        assert_eq!(structure.len(), 2);
    }

    #[test]
    fn empty_structure_is_a_valid_value() {
        let structure = RnaStructure::new("not-a-structure", Vec::new());
        assert!(structure.is_empty());
        assert_eq!(structure.len(), 0);
    }
}
