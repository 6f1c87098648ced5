//! Top-N selection and output records

use crate::{Candidates, Gender, Perfume};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

const TOP_NOTES_SHOWN: usize = 5;
const MID_NOTES_SHOWN: usize = 5;
const BASE_NOTES_SHOWN: usize = 4;

/// One recommended perfume as returned to callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub brand: String,
    pub gender: Option<Gender>,
    pub rating: f64,
    pub rating_count: u32,
    pub year: Option<i32>,
    pub top_notes: Vec<String>,
    pub mid_notes: Vec<String>,
    pub base_notes: Vec<String>,
    pub url: String,
    /// Cosine similarity as a percentage, one decimal
    pub score_pct: f64,
    /// Selected notes found in this perfume, in selection order
    pub matched_notes: Vec<String>,
}

impl Recommendation {
    pub fn new<S: AsRef<str>>(perfume: &Perfume, score: f64, selected: &[S]) -> Self {
        let matched_notes = selected
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|n| perfume.has_note(n))
            .map(str::to_string)
            .collect();

        Self {
            name: perfume.name.clone(),
            brand: perfume.brand.clone(),
            gender: perfume.gender,
            rating: round_to(perfume.rating, 2),
            rating_count: perfume.rating_count,
            year: perfume.year,
            top_notes: head(&perfume.top_notes, TOP_NOTES_SHOWN),
            mid_notes: head(&perfume.mid_notes, MID_NOTES_SHOWN),
            base_notes: head(&perfume.base_notes, BASE_NOTES_SHOWN),
            url: perfume.url.clone(),
            score_pct: round_to(score * 100.0, 1),
            matched_notes,
        }
    }
}

/// Pick the `top_n` best candidates, score descending.
///
/// The sort is stable: equal scores keep their candidate (catalog) order.
pub fn rank<'a>(candidates: &Candidates<'a>, scores: &[f64], top_n: usize) -> Vec<(&'a Perfume, f64)> {
    debug_assert_eq!(candidates.len(), scores.len());

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by_key(|&i| Reverse(OrderedFloat(scores[i])));
    order.truncate(top_n);

    order
        .into_iter()
        .map(|i| (candidates.perfumes[i], scores[i]))
        .collect()
}

/// Round to `decimals` places, exact halves to the even digit
#[inline]
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[inline]
fn head(notes: &[String], n: usize) -> Vec<String> {
    notes.iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perfumes() -> Vec<Perfume> {
        ["A", "B", "C", "D"]
            .iter()
            .map(|name| Perfume::new(*name, "X").with_notes(&["rose"], &[], &[]))
            .collect()
    }

    #[test]
    fn test_rank_descending_with_stable_ties() {
        let catalog = perfumes();
        let candidates = Candidates {
            perfumes: catalog.iter().collect(),
            rows: Vec::new(),
        };
        let scores = [0.5, 0.9, 0.5, 0.9];
        let ranked: Vec<_> = rank(&candidates, &scores, 10)
            .into_iter()
            .map(|(p, _)| p.name.as_str())
            .collect();
        assert_eq!(ranked, vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_rank_truncates() {
        let catalog = perfumes();
        let candidates = Candidates {
            perfumes: catalog.iter().collect(),
            rows: Vec::new(),
        };
        assert_eq!(rank(&candidates, &[0.0; 4], 2).len(), 2);
        assert_eq!(rank(&candidates, &[0.0; 4], 0).len(), 0);
    }

    #[test]
    fn test_recommendation_fields() {
        let perfume = Perfume::new("Aventus", "Creed")
            .with_gender(Some(Gender::Men))
            .with_rating(4.2345, 12000)
            .with_year(Some(2010))
            .with_url("https://example.org/aventus")
            .with_notes(
                &["pineapple", "bergamot", "black currant", "apple", "lemon", "pink pepper"],
                &["birch", "patchouli", "jasmine", "rose", "juniper", "lily"],
                &["musk", "oakmoss", "ambergris", "vanilla", "cedar"],
            );

        let rec = Recommendation::new(&perfume, 2.0 / 3.0, &["vanilla", "oud", "pineapple"]);
        assert_eq!(rec.rating, 4.23);
        assert_eq!(rec.score_pct, 66.7);
        assert_eq!(rec.top_notes.len(), 5);
        assert_eq!(rec.mid_notes.len(), 5);
        assert_eq!(rec.base_notes, vec!["musk", "oakmoss", "ambergris", "vanilla"]);
        assert_eq!(rec.matched_notes, vec!["vanilla", "pineapple"]);
        assert_eq!(rec.year, Some(2010));
    }

    #[test]
    fn test_exact_halves_round_to_even() {
        let query: Vec<String> = (0..16).map(|i| format!("n{}", i)).collect();
        let perfume = Perfume::new("Sixteen", "X")
            .with_rating(4.125, 300)
            .with_notes(query.as_slice(), &[], &[]);

        // one shared note out of 16 on each side: 6.25%
        let rec = Recommendation::new(&perfume, 1.0 / 16.0, &["n0"]);
        assert_eq!(rec.score_pct, 6.2);
        assert_eq!(rec.rating, 4.12);

        let rec = Recommendation::new(&perfume.clone().with_rating(4.375, 300), 3.0 / 16.0, &["n0"]);
        assert_eq!(rec.score_pct, 18.8);
        assert_eq!(rec.rating, 4.38);
    }

    #[test]
    fn test_missing_year_and_gender_serialize_as_null() {
        let perfume = Perfume::new("Untitled", "Anon").with_notes(&["musk"], &[], &[]);
        let rec = Recommendation::new(&perfume, 0.0, &["musk"]);
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json["gender"].is_null());
        assert!(json["year"].is_null());
        assert_eq!(json["matched_notes"], serde_json::json!(["musk"]));
    }
}
