//! Linear interpolation evaluator.
//!
//! This is the reader side of a sparsified curve: a piecewise-linear interpolant
//! through strictly increasing anchors. It is also the oracle the sparsifier uses
//! to decide whether a sample can be dropped.
//!
//! # Module Organization
//!
//! - [`LinearInterp`] - interpolant over any number (>= 2) of anchors
//! - [`LinearSegment`] - interpolant over a single two-anchor bracket
//!
//! Neither type extrapolates: queries outside the anchor range fail with
//! [`InterpolateError::OutOfDomain`].

mod error;
mod linear;
mod segment;

pub use error::{InterpolateError, InterpolateResult};
pub use linear::LinearInterp;
pub use segment::LinearSegment;

pub(crate) use linear::ensure_strictly_increasing;
