//! Retention mask over the dense sample sequence.

/// Boolean retention flag per input sample.
///
/// Created all-true, mutated index by index during the sparsification pass and
/// consumed to slice the output. Endpoints are never removed: [`remove`](Self::remove)
/// ignores index 0 and index n-1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionMask {
    keep: Vec<bool>,
}

impl RetentionMask {
    /// All-true mask over `n` samples.
    pub fn new(n: usize) -> Self {
        Self {
            keep: vec![true; n],
        }
    }

    /// Wrap an existing mask.
    pub fn from_vec(keep: Vec<bool>) -> Self {
        Self { keep }
    }

    /// Number of samples covered by the mask.
    pub fn len(&self) -> usize {
        self.keep.len()
    }

    /// True when the mask covers no samples.
    pub fn is_empty(&self) -> bool {
        self.keep.is_empty()
    }

    /// Whether sample `i` is currently retained.
    #[inline]
    pub fn is_retained(&self, i: usize) -> bool {
        self.keep[i]
    }

    /// Mark interior sample `i` as removed. Endpoints stay retained.
    #[inline]
    pub fn remove(&mut self, i: usize) {
        if i > 0 && i + 1 < self.keep.len() {
            self.keep[i] = false;
        }
    }

    /// Mark sample `i` as retained again.
    #[inline]
    pub fn restore(&mut self, i: usize) {
        self.keep[i] = true;
    }

    /// True when both endpoints are retained (vacuously true for an empty mask).
    pub fn endpoints_retained(&self) -> bool {
        match (self.keep.first(), self.keep.last()) {
            (Some(&first), Some(&last)) => first && last,
            _ => true,
        }
    }

    /// Greatest retained index strictly below `i`.
    pub fn lower_anchor(&self, i: usize) -> Option<usize> {
        (0..i.min(self.keep.len())).rev().find(|&j| self.keep[j])
    }

    /// Smallest retained index strictly above `i`.
    pub fn upper_anchor(&self, i: usize) -> Option<usize> {
        (i + 1..self.keep.len()).find(|&j| self.keep[j])
    }

    /// Number of retained samples.
    pub fn retained_count(&self) -> usize {
        self.keep.iter().filter(|&&k| k).count()
    }

    /// Indices of removed samples, in increasing order.
    pub fn removed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.keep
            .iter()
            .enumerate()
            .filter(|&(_, &k)| !k)
            .map(|(i, _)| i)
    }

    /// The retained values of `data`, in order. `data` must have the mask's length.
    pub fn select(&self, data: &[f64]) -> Vec<f64> {
        debug_assert_eq!(data.len(), self.keep.len());
        data.iter()
            .zip(&self.keep)
            .filter(|&(_, &k)| k)
            .map(|(&v, _)| v)
            .collect()
    }

    /// Borrow the raw flags.
    pub fn as_slice(&self) -> &[bool] {
        &self.keep
    }

    /// Consume into the raw flags.
    pub fn into_vec(self) -> Vec<bool> {
        self.keep
    }
}
