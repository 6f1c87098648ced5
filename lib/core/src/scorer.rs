//! Cosine similarity over multi-hot vectors
//!
//! For binary vectors the dot product is the number of shared notes and
//! the norm is the square root of the number of set notes, so
//!
//! ```text
//! cos(q, r) = shared / sqrt(|q| * |r|)
//! ```
//!
//! A pair where either side has no set notes scores exactly 0.0.

use crate::vector::{count_ones, dot};
use crate::{Candidates, NoteVector};
use rayon::prelude::*;

/// Cosine similarity between a query and one matrix row, in [0, 1]
#[inline]
pub fn cosine_similarity(query: &NoteVector, row: &[u8]) -> f64 {
    let query_ones = query.count_ones();
    let row_ones = count_ones(row);
    if query_ones == 0 || row_ones == 0 {
        return 0.0;
    }

    let shared = dot(query.as_slice(), row);
    // sqrt of the product keeps identical sets at exactly 1.0
    shared as f64 / ((query_ones * row_ones) as f64).sqrt()
}

/// Score every candidate row. Output order matches `candidates.rows`.
pub fn score(query: &NoteVector, candidates: &Candidates<'_>) -> Vec<f64> {
    if query.count_ones() == 0 {
        return vec![0.0; candidates.rows.len()];
    }
    candidates
        .rows
        .par_iter()
        .map(|row| cosine_similarity(query, row))
        .collect()
}
