use crate::{NoteVector, Perfume};
use ahash::AHashMap;

/// Ordered set of every distinct note in a catalog.
///
/// Position `j` in the vocabulary is column `j` of every encoded vector.
/// Order is first appearance across the catalog's `all_notes`, so it is
/// deterministic for a given catalog order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    notes: Vec<String>,
    positions: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Collect the vocabulary of a catalog. An empty catalog yields an empty vocabulary.
    pub fn build(catalog: &[Perfume]) -> Self {
        let mut vocabulary = Self::default();
        for perfume in catalog {
            for note in &perfume.all_notes {
                if !vocabulary.positions.contains_key(note) {
                    vocabulary.positions.insert(note.clone(), vocabulary.notes.len());
                    vocabulary.notes.push(note.clone());
                }
            }
        }
        vocabulary
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    #[inline]
    pub fn position(&self, note: &str) -> Option<usize> {
        self.positions.get(note).copied()
    }

    #[inline]
    pub fn contains(&self, note: &str) -> bool {
        self.positions.contains_key(note)
    }

    /// Multi-hot encode a note list over this vocabulary.
    /// Notes outside the vocabulary contribute nothing.
    pub fn encode<S: AsRef<str>>(&self, notes: &[S]) -> NoteVector {
        let mut bits = vec![0u8; self.len()];
        for note in notes {
            if let Some(pos) = self.position(note.as_ref()) {
                bits[pos] = 1;
            }
        }
        NoteVector::new(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Perfume> {
        vec![
            Perfume::new("A", "X").with_notes(&["rose", "musk"], &[], &[]),
            Perfume::new("B", "X").with_notes(&["rose"], &["vanilla"], &[]),
            Perfume::new("C", "Y").with_notes(&[], &[], &["oud", "musk"]),
        ]
    }

    #[test]
    fn test_first_appearance_order() {
        let vocab = Vocabulary::build(&catalog());
        assert_eq!(vocab.notes(), &["rose", "musk", "vanilla", "oud"]);
        assert_eq!(vocab.position("vanilla"), Some(2));
        assert!(!vocab.contains("amber"));
    }

    #[test]
    fn test_empty_catalog() {
        let vocab = Vocabulary::build(&[]);
        assert!(vocab.is_empty());
        assert_eq!(vocab.encode(&["rose"]).dim(), 0);
    }

    #[test]
    fn test_encode_drops_unknown_notes() {
        let vocab = Vocabulary::build(&catalog());
        let v = vocab.encode(&["oud", "amber", "rose", "oud"]);
        assert_eq!(v.as_slice(), &[1, 0, 0, 1]);
        assert_eq!(v.count_ones(), 2);
    }
}
