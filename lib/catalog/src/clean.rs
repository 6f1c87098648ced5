//! Field cleaning rules for the raw export
//!
//! All functions are total: malformed input becomes `None`, `0` or an
//! empty list, and the loader decides what to do with the row.

use sillage_core::{dedup_notes, Gender};

/// Decode Latin-1 bytes. Every byte maps to the code point of the same value.
pub fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Rating with either decimal separator (`3,97` or `3.97`)
pub fn rating(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
}

/// Review count; anything unparseable counts as zero
pub fn rating_count(raw: &str) -> u32 {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u32>() {
        return n;
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => f as u32,
        _ => 0,
    }
}

/// Release year, accepting integral floats such as `2010.0`
pub fn year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(y) = raw.parse::<i32>() {
        return Some(y);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => Some(f as i32),
        _ => None,
    }
}

pub fn gender(raw: &str) -> Option<Gender> {
    raw.parse().ok()
}

/// Comma-separated notes, lowercased and deduplicated. `unknown` means none.
pub fn notes(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("unknown") {
        return Vec::new();
    }
    let notes: Vec<String> = raw
        .split(',')
        .map(|n| n.trim().to_lowercase())
        .filter(|n| !n.is_empty())
        .collect();
    dedup_notes(&notes)
}

/// Display name: dashes become spaces
pub fn name(raw: &str) -> String {
    raw.replace('-', " ").trim().to_string()
}

/// Brand in title case: first letter of every alphabetic run upper, the rest lower
pub fn brand(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
