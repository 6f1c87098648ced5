// Categorical pre-filter applied before scoring
use crate::{NoteIndex, Perfume};
use ahash::AHashSet;

pub trait Filter {
    fn matches(&self, perfume: &Perfume) -> bool;
}

/// Gender and brand restriction for a recommendation request.
///
/// An empty gender string or an empty brand set means "no restriction".
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    gender: Option<String>,
    brands: Option<AHashSet<String>>,
}

/// Candidate rows surviving a filter: `perfumes[i]` is the record of `rows[i]`
#[derive(Debug, Clone, Default)]
pub struct Candidates<'a> {
    pub perfumes: Vec<&'a Perfume>,
    pub rows: Vec<&'a [u8]>,
}

impl<'a> Candidates<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.perfumes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.perfumes.is_empty()
    }
}

impl CatalogFilter {
    pub fn new(gender: Option<&str>, brands: Option<&[String]>) -> Self {
        let filter = Self::default();
        let filter = match gender {
            Some(g) => filter.with_gender(g),
            None => filter,
        };
        match brands {
            Some(b) => filter.with_brands(b),
            None => filter,
        }
    }

    #[must_use]
    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = Some(gender.to_string()).filter(|g| !g.is_empty());
        self
    }

    #[must_use]
    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let brands: AHashSet<String> = brands
            .into_iter()
            .map(|b| AsRef::<str>::as_ref(&b).to_string())
            .collect();
        self.brands = Some(brands).filter(|b| !b.is_empty());
        self
    }

    /// True when neither gender nor brands restrict the catalog
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gender.is_none() && self.brands.is_none()
    }

    /// One flag per catalog row, in catalog order
    pub fn mask(&self, catalog: &[Perfume]) -> Vec<bool> {
        catalog.iter().map(|p| self.matches(p)).collect()
    }

    /// Narrow the catalog and its matrix with the same mask
    pub fn apply<'a>(&self, index: &'a NoteIndex) -> Candidates<'a> {
        let catalog = index.catalog();
        let matrix = index.matrix();

        if self.is_empty() {
            return Candidates {
                perfumes: catalog.iter().collect(),
                rows: matrix.iter_rows().collect(),
            };
        }

        let mask = self.mask(catalog);
        let mut candidates = Candidates::default();
        for (i, keep) in mask.into_iter().enumerate() {
            if keep {
                candidates.perfumes.push(&catalog[i]);
                candidates.rows.push(matrix.row(i));
            }
        }
        candidates
    }
}

impl Filter for CatalogFilter {
    fn matches(&self, perfume: &Perfume) -> bool {
        if let Some(gender) = &self.gender {
            if perfume.gender.map(|g| g.as_str()) != Some(gender.as_str()) {
                return false;
            }
        }
        if let Some(brands) = &self.brands {
            if !brands.contains(&perfume.brand) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Gender;

    fn index() -> NoteIndex {
        NoteIndex::build(vec![
            Perfume::new("A", "Dior")
                .with_gender(Some(Gender::Women))
                .with_notes(&["rose"], &[], &[]),
            Perfume::new("B", "Chanel")
                .with_gender(Some(Gender::Men))
                .with_notes(&["musk"], &[], &[]),
            Perfume::new("C", "Dior")
                .with_gender(Some(Gender::Men))
                .with_notes(&["oud"], &[], &[]),
            Perfume::new("D", "Dior").with_notes(&["iris"], &[], &[]),
        ])
        .unwrap()
    }

    #[test]
    fn test_no_filter_keeps_everything() {
        let index = index();
        let filter = CatalogFilter::new(None, None);
        let candidates = filter.apply(&index);
        assert_eq!(candidates.len(), 4);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_empty_values_mean_absent() {
        let filter = CatalogFilter::new(Some(""), Some(&[][..]));
        assert!(filter.is_empty());
        assert!(CatalogFilter::default().with_brands(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_gender_and_brand_preserve_correspondence() {
        let index = index();
        let filter = CatalogFilter::default().with_gender("men").with_brands(["Dior"]);
        let candidates = filter.apply(&index);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates.perfumes[0].name, "C");
        let oud = index.vocabulary().position("oud").unwrap();
        assert_eq!(candidates.rows[0][oud], 1);
        assert_eq!(filter.mask(index.catalog()), vec![false, false, true, false]);
    }

    #[test]
    fn test_missing_gender_never_matches_gender_filter() {
        let index = index();
        let filter = CatalogFilter::default().with_gender("women");
        let names: Vec<_> = filter.apply(&index).perfumes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
    }
}
