//! Note tiers for selection widgets
//!
//! Each tier lists its most frequent notes. A note is shown once: base
//! excludes notes already in top, middle excludes notes in top or base.

use crate::Perfume;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// How many notes to consider and show per tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimits {
    pub top: usize,
    pub base: usize,
    pub mid: usize,
    pub top_shown: usize,
    pub base_shown: usize,
    pub mid_shown: usize,
}

impl Default for TierLimits {
    fn default() -> Self {
        Self {
            top: 24,
            base: 24,
            mid: 28,
            top_shown: 24,
            base_shown: 24,
            mid_shown: 20,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteTiers {
    pub top: Vec<String>,
    pub mid: Vec<String>,
    pub base: Vec<String>,
}

impl NoteTiers {
    pub fn from_catalog(catalog: &[Perfume], limits: &TierLimits) -> Self {
        let top = most_common(catalog.iter().map(|p| &p.top_notes), limits.top);
        let base: Vec<String> = most_common(catalog.iter().map(|p| &p.base_notes), limits.base)
            .into_iter()
            .filter(|n| !top.contains(n))
            .collect();
        let mid: Vec<String> = most_common(catalog.iter().map(|p| &p.mid_notes), limits.mid)
            .into_iter()
            .filter(|n| !top.contains(n) && !base.contains(n))
            .collect();

        Self {
            top: truncated(top, limits.top_shown),
            mid: truncated(mid, limits.mid_shown),
            base: truncated(base, limits.base_shown),
        }
    }
}

/// The `n` most frequent notes; ties keep first-seen order
fn most_common<'a, I>(tiers: I, n: usize) -> Vec<String>
where
    I: Iterator<Item = &'a Vec<String>>,
{
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    let mut slots: AHashMap<&'a str, usize> = AHashMap::new();
    for notes in tiers {
        for note in notes {
            match slots.get(note.as_str()) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(note.as_str(), counts.len());
                    counts.push((note.as_str(), 1));
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(n).map(|(note, _)| note.to_string()).collect()
}

fn truncated(mut notes: Vec<String>, n: usize) -> Vec<String> {
    notes.truncate(n);
    notes
}
