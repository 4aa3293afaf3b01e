//! Options and result types for sparsification.

use crate::sparsify::error::{SparsifyError, SparsifyResult};
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// How the interpolant is rebuilt for each removal candidate.
///
/// Both strategies produce identical masks for strictly increasing input, because
/// a linear interpolant only depends on the two anchors bracketing the query.
///
/// | Strategy | Per-candidate cost | Use Case |
/// |----------|--------------------|----------|
/// | Global   | O(n)               | Reference behavior, small tables |
/// | Local    | O(gap)             | Large inputs |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BracketStrategy {
    /// Rebuild a [`LinearInterp`](crate::interpolate::LinearInterp) over the whole
    /// tentative retained set for every candidate (default).
    #[default]
    Global,

    /// Build only the `[lower, upper]` [`LinearSegment`](crate::interpolate::LinearSegment)
    /// around the candidate.
    Local,
}

/// Options for [`sparsify_with`](crate::sparsify::sparsify_with).
#[derive(Debug, Clone)]
pub struct SparsifyOptions {
    /// Maximum absolute y deviation allowed for a dropped sample (default: 0.0)
    pub tolerance: f64,

    /// Interpolant construction strategy (default: Global)
    pub strategy: BracketStrategy,
}

impl Default for SparsifyOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            strategy: BracketStrategy::default(),
        }
    }
}

impl SparsifyOptions {
    /// Create options with the specified tolerance.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }

    /// Set the tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the bracket strategy.
    pub fn strategy(mut self, strategy: BracketStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reject NaN and negative tolerances. `+inf` is allowed and drops every interior sample.
    pub fn validate(&self) -> SparsifyResult<()> {
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(SparsifyError::InvalidTolerance {
                value: self.tolerance,
            });
        }
        Ok(())
    }
}

/// A sparsified curve: the retained samples and the retention mask over the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparsified {
    /// Retained x samples, in input order.
    pub x: Vec<f64>,
    /// Retained y samples, in input order.
    pub y: Vec<f64>,
    /// `mask[i]` is true when input sample `i` was retained.
    pub mask: Vec<bool>,
}

impl Sparsified {
    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the input was empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of samples dropped from the input.
    pub fn removed_count(&self) -> usize {
        self.mask.len() - self.x.len()
    }

    /// Input length divided by retained length (1.0 for empty input).
    pub fn compression_ratio(&self) -> f64 {
        if self.x.is_empty() {
            return 1.0;
        }
        self.mask.len() as f64 / self.x.len() as f64
    }

    /// Split into `(x, y, mask)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<bool>) {
        (self.x, self.y, self.mask)
    }
}

/// Tensor form of [`Sparsified`], returned by
/// [`SparsifyAlgorithms::sparsify`](crate::sparsify::SparsifyAlgorithms::sparsify).
#[derive(Debug, Clone)]
pub struct SparsifiedTensors<R: Runtime> {
    /// Retained x samples, 1D, on the client's device.
    pub x: Tensor<R>,
    /// Retained y samples, 1D, on the client's device.
    pub y: Tensor<R>,
    /// Retention mask over the input samples.
    pub mask: Vec<bool>,
}
