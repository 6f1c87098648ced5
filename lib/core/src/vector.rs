use serde::{Deserialize, Serialize};

/// A multi-hot vector over a note vocabulary.
///
/// Every coordinate is 0 or 1. The dot product of two such vectors is the
/// number of shared notes and the squared norm is the number of set notes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteVector {
    bits: Vec<u8>,
}

impl NoteVector {
    #[inline]
    #[must_use]
    pub fn new(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Self { bits }
    }

    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self { bits: vec![0; dim] }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Number of set coordinates
    #[inline]
    pub fn count_ones(&self) -> usize {
        count_ones(&self.bits)
    }

    /// Number of coordinates set in both `self` and `row`
    #[inline]
    pub fn dot(&self, row: &[u8]) -> usize {
        dot(&self.bits, row)
    }

    /// Cosine similarity against a matrix row, 0.0 when either side is empty
    #[inline]
    pub fn cosine_similarity(&self, row: &[u8]) -> f64 {
        crate::scorer::cosine_similarity(self, row)
    }
}

#[inline]
pub(crate) fn count_ones(bits: &[u8]) -> usize {
    bits.iter().map(|&b| b as usize).sum()
}

#[inline]
pub(crate) fn dot(a: &[u8], b: &[u8]) -> usize {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| (x & y) as usize).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_counts_shared_bits() {
        let v = NoteVector::new(vec![1, 0, 1, 1]);
        assert_eq!(v.dot(&[1, 1, 0, 1]), 2);
        assert_eq!(v.dot(&[0, 1, 0, 0]), 0);
        assert_eq!(v.count_ones(), 3);
    }

    #[test]
    fn test_zeros() {
        let v = NoteVector::zeros(5);
        assert_eq!(v.dim(), 5);
        assert_eq!(v.count_ones(), 0);
    }
}
