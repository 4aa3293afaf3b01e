//! Error types for sparsification.

use crate::interpolate::InterpolateError;
use std::fmt;

/// Result type for sparsification operations.
pub type SparsifyResult<T> = Result<T, SparsifyError>;

/// Errors that can occur while sparsifying a curve.
#[derive(Debug, Clone, PartialEq)]
pub enum SparsifyError {
    /// x and y (or mask) sequences have different lengths.
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Tolerance is negative or NaN.
    InvalidTolerance { value: f64 },

    /// Invalid argument other than the tolerance.
    InvalidParameter { parameter: String, message: String },

    /// The interpolation evaluator could not be built or evaluated.
    ///
    /// For valid input this cannot happen; it signals non-increasing or
    /// duplicate x values.
    Interpolation(InterpolateError),

    /// Error from underlying numr operation.
    NumrError(String),
}

impl fmt::Display for SparsifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Shape mismatch in {}: expected length {}, got {}",
                    context, expected, actual
                )
            }
            Self::InvalidTolerance { value } => {
                write!(f, "Invalid tolerance {}: must be non-negative", value)
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::Interpolation(err) => write!(f, "Interpolation failed: {}", err),
            Self::NumrError(msg) => write!(f, "numr error: {}", msg),
        }
    }
}

impl std::error::Error for SparsifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Interpolation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InterpolateError> for SparsifyError {
    fn from(err: InterpolateError) -> Self {
        Self::Interpolation(err)
    }
}

impl From<numr::error::Error> for SparsifyError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}
