//! Dense binary feature matrix
//!
//! Row `i` is the multi-hot encoding of catalog record `i`; column `j` is
//! vocabulary note `j`. Rows are stored contiguously (row-major), so a row
//! is a plain `&[u8]` of length [`NoteMatrix::dim`].

use crate::{Perfume, Vocabulary};

#[derive(Debug, Clone, Default)]
pub struct NoteMatrix {
    cells: Vec<u8>,
    rows: usize,
    dim: usize,
}

impl NoteMatrix {
    /// Encode every catalog record over `vocabulary`, preserving catalog order
    pub fn build(catalog: &[Perfume], vocabulary: &Vocabulary) -> Self {
        let dim = vocabulary.len();
        let mut cells = Vec::with_capacity(catalog.len() * dim);
        for perfume in catalog {
            let row = vocabulary.encode(&perfume.all_notes);
            cells.extend_from_slice(row.as_slice());
        }
        Self {
            cells,
            rows: catalog.len(),
            dim,
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, equal to the vocabulary size
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Row `i`. Panics if `i >= rows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[u8] {
        let start = i * self.dim;
        &self.cells[start..start + self.dim]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }
}
