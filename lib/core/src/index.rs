use crate::tiers::NoteTiers;
use crate::{Error, NoteMatrix, Perfume, Result, TierLimits, Vocabulary};
use serde::{Deserialize, Serialize};

/// Catalog snapshot with its vocabulary and feature matrix.
///
/// All three are built together from the same records and never change
/// afterwards; row `i` of the matrix always belongs to `catalog()[i]`.
#[derive(Debug, Clone)]
pub struct NoteIndex {
    catalog: Vec<Perfume>,
    vocabulary: Vocabulary,
    matrix: NoteMatrix,
}

/// Sizes reported for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub catalog_size: usize,
    pub vocabulary_size: usize,
    pub feature_dimension: usize,
}

impl NoteIndex {
    /// Validate the records and encode them.
    ///
    /// Fails when the catalog is empty or any record breaks the note invariants.
    pub fn build(catalog: Vec<Perfume>) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        for perfume in &catalog {
            perfume.validate()?;
        }

        let vocabulary = Vocabulary::build(&catalog);
        if vocabulary.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let matrix = NoteMatrix::build(&catalog, &vocabulary);

        Ok(Self {
            catalog,
            vocabulary,
            matrix,
        })
    }

    #[inline]
    pub fn catalog(&self) -> &[Perfume] {
        &self.catalog
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn matrix(&self) -> &NoteMatrix {
        &self.matrix
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            catalog_size: self.catalog.len(),
            vocabulary_size: self.vocabulary.len(),
            feature_dimension: self.matrix.dim(),
        }
    }

    /// Most frequent notes per tier for selection widgets
    pub fn note_tiers(&self, limits: &TierLimits) -> NoteTiers {
        NoteTiers::from_catalog(&self.catalog, limits)
    }

    /// Distinct brands, sorted
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = self.catalog.iter().map(|p| p.brand.clone()).collect();
        brands.sort();
        brands.dedup();
        brands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_stats() {
        let index = NoteIndex::build(vec![
            Perfume::new("A", "Zara").with_notes(&["rose", "musk"], &[], &[]),
            Perfume::new("B", "Acqua").with_notes(&["rose"], &["vanilla"], &[]),
            Perfume::new("C", "Zara").with_notes(&[], &[], &["oud"]),
        ])
        .unwrap();

        let stats = index.stats();
        assert_eq!(stats.catalog_size, 3);
        assert_eq!(stats.vocabulary_size, 4);
        assert_eq!(stats.vocabulary_size, stats.feature_dimension);
        assert_eq!(index.brands(), vec!["Acqua", "Zara"]);
    }

    #[test]
    fn test_empty_catalog_fails() {
        assert!(matches!(NoteIndex::build(Vec::new()), Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_noteless_record_fails() {
        let result = NoteIndex::build(vec![Perfume::new("Blank", "None")]);
        assert!(matches!(result, Err(Error::InvalidRecord { .. })));
    }
}
