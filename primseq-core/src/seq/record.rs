/// One named sequence (chromosome, scaffold, ...). Bases are fixed once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    name: Box<str>,
    bases: Box<[u8]>,
}

impl SequenceRecord {
    /// Surrounding whitespace is trimmed from `name`; the bases are stored
    /// as given.
    pub fn new(name: &str, bases: impl Into<Box<[u8]>>) -> Self {
        Self {
            name: name.trim().into(),
            bases: bases.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bases(&self) -> &[u8] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_trimmed_but_otherwise_kept() {
        let r = SequenceRecord::new("  >chr1 assembled  \n", b"ACGT".to_vec());
        assert_eq!(r.name(), ">chr1 assembled");
        assert_eq!(r.bases(), b"ACGT");
        assert_eq!(r.len(), 4);
    }

    #[test]
    fn plain_name_kept() {
        let r = SequenceRecord::new("scaffold_12", Vec::new());
        assert_eq!(r.name(), "scaffold_12");
        assert!(r.is_empty());
    }

    #[test]
    fn bases_not_renormalized() {
        let r = SequenceRecord::new("x", b"acgN".to_vec());
        assert_eq!(r.bases(), b"acgN");
    }
}
