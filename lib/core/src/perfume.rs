use crate::{Error, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender a perfume is marketed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Women,
    Men,
    Unisex,
}

impl Gender {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Women => "women",
            Gender::Men => "men",
            Gender::Unisex => "unisex",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "women" => Ok(Gender::Women),
            "men" => Ok(Gender::Men),
            "unisex" => Ok(Gender::Unisex),
            other => Err(Error::InvalidRecord {
                name: String::new(),
                reason: format!("unknown gender {:?}", other),
            }),
        }
    }
}

/// A catalog perfume with its note pyramid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Perfume {
    pub name: String,
    pub brand: String,
    pub gender: Option<Gender>,
    pub rating: f64,
    pub rating_count: u32,
    pub year: Option<i32>,
    pub top_notes: Vec<String>,
    pub mid_notes: Vec<String>,
    pub base_notes: Vec<String>,
    /// Union of the three tiers, first-seen order, no duplicates
    pub all_notes: Vec<String>,
    pub url: String,
}

impl Perfume {
    /// Create a perfume with empty tiers. Use the `with_*` builders to add notes.
    #[must_use]
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            gender: None,
            rating: 0.0,
            rating_count: 0,
            year: None,
            top_notes: Vec::new(),
            mid_notes: Vec::new(),
            base_notes: Vec::new(),
            all_notes: Vec::new(),
            url: String::new(),
        }
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64, rating_count: u32) -> Self {
        self.rating = rating;
        self.rating_count = rating_count;
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the three tiers and recompute `all_notes`
    #[must_use]
    pub fn with_notes<S: AsRef<str>>(mut self, top: &[S], mid: &[S], base: &[S]) -> Self {
        self.top_notes = dedup_notes(top);
        self.mid_notes = dedup_notes(mid);
        self.base_notes = dedup_notes(base);
        self.all_notes = merge_tiers(&self.top_notes, &self.mid_notes, &self.base_notes);
        self
    }

    /// Whether `note` appears in any tier
    #[inline]
    pub fn has_note(&self, note: &str) -> bool {
        self.all_notes.iter().any(|n| n == note)
    }

    /// Check the record invariants: at least one note, no repeated note in `all_notes`
    pub fn validate(&self) -> Result<()> {
        if self.all_notes.is_empty() {
            return Err(self.invalid("perfume has no notes"));
        }

        let mut seen = AHashSet::with_capacity(self.all_notes.len());
        for note in &self.all_notes {
            if !seen.insert(note.as_str()) {
                return Err(self.invalid(format!("note {:?} appears twice", note)));
            }
        }

        let expected = merge_tiers(&self.top_notes, &self.mid_notes, &self.base_notes);
        if expected != self.all_notes {
            return Err(self.invalid("all_notes does not match the tier union"));
        }

        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> Error {
        Error::InvalidRecord {
            name: self.name.clone(),
            reason: reason.into(),
        }
    }
}

/// Drop repeated notes, keeping the first occurrence
pub fn dedup_notes<S: AsRef<str>>(notes: &[S]) -> Vec<String> {
    let mut seen: AHashSet<&str> = AHashSet::with_capacity(notes.len());
    let mut out = Vec::with_capacity(notes.len());
    for note in notes {
        let note: &str = note.as_ref();
        if seen.insert(note) {
            out.push(note.to_string());
        }
    }
    out
}

fn merge_tiers(top: &[String], mid: &[String], base: &[String]) -> Vec<String> {
    let chained: Vec<&String> = top.iter().chain(mid).chain(base).collect();
    dedup_notes(&chained)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_notes_first_seen_order() {
        let p = Perfume::new("Shalimar", "Guerlain").with_notes(
            &["bergamot", "lemon", "bergamot"],
            &["iris", "lemon"],
            &["vanilla", "iris", "tonka bean"],
        );
        assert_eq!(p.top_notes, vec!["bergamot", "lemon"]);
        assert_eq!(p.all_notes, vec!["bergamot", "lemon", "iris", "vanilla", "tonka bean"]);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_and_duplicates() {
        let empty = Perfume::new("Nothing", "Void");
        assert!(matches!(empty.validate(), Err(Error::InvalidRecord { .. })));

        let mut dup = Perfume::new("Twice", "Echo").with_notes(&["rose"], &[], &["musk"]);
        dup.all_notes.push("rose".to_string());
        assert!(dup.validate().is_err());
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("Women".parse::<Gender>().unwrap(), Gender::Women);
        assert_eq!(" unisex ".parse::<Gender>().unwrap(), Gender::Unisex);
        assert!("other".parse::<Gender>().is_err());
        assert_eq!(Gender::Men.to_string(), "men");
    }
}
