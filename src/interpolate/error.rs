//! Error types for the linear interpolation evaluator.

use std::fmt;

/// Result type for interpolation operations.
pub type InterpolateResult<T> = Result<T, InterpolateError>;

/// Errors raised while building or evaluating an interpolant.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolateError {
    /// Anchor x and y sequences have different lengths.
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Too few anchors to form a single bracket.
    InsufficientData {
        required: usize,
        actual: usize,
        context: String,
    },

    /// Query point lies outside the anchor range. Linear interpolation never extrapolates.
    OutOfDomain {
        point: f64,
        min: f64,
        max: f64,
        context: String,
    },

    /// Anchor x values are not strictly increasing.
    NotMonotonic { context: String },

    /// Invalid argument (e.g. a tensor of the wrong rank).
    InvalidParameter { parameter: String, message: String },

    /// Error from underlying numr operation.
    NumrError(String),
}

impl fmt::Display for InterpolateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Shape mismatch in {}: x has {} anchors, y has {}",
                    context, expected, actual
                )
            }
            Self::InsufficientData {
                required,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Insufficient anchors for {}: need at least {}, got {}",
                    context, required, actual
                )
            }
            Self::OutOfDomain {
                point,
                min,
                max,
                context,
            } => {
                write!(
                    f,
                    "Point {} is outside anchor range [{}, {}] in {}",
                    point, min, max, context
                )
            }
            Self::NotMonotonic { context } => {
                write!(f, "Anchor x values must be strictly increasing in {}", context)
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::NumrError(msg) => {
                write!(f, "numr error: {}", msg)
            }
        }
    }
}

impl std::error::Error for InterpolateError {}

impl From<numr::error::Error> for InterpolateError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}
