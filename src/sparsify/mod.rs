//! Tolerance-bounded curve sparsification.
//!
//! Reduces a densely sampled curve (strictly increasing x) to a subset of samples
//! such that piecewise-linear interpolation through the retained samples reproduces
//! every dropped sample within an absolute y tolerance. Endpoints are always kept.
//!
//! The reduction is a greedy left-to-right pass: it is deterministic and cheap but
//! not globally optimal.
//!
//! # Entry Points
//!
//! - [`sparsify`] - slices in, `(x, y, mask)` out
//! - [`sparsify_with`] - slices in, [`Sparsified`] out, configurable via [`SparsifyOptions`]
//! - [`SparsifyAlgorithms`] - numr tensors in and out, on any backend
//! - [`max_deviation`] - audit a mask against the dense samples
//!
//! ```
//! use sparsr::sparsify::{BracketStrategy, SparsifyOptions, max_deviation, sparsify_with};
//!
//! let x: Vec<f64> = (0..100).map(|i| i as f64 * 0.1).collect();
//! let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
//!
//! let opts = SparsifyOptions::with_tolerance(1e-3).strategy(BracketStrategy::Local);
//! let curve = sparsify_with(&x, &y, &opts).unwrap();
//!
//! assert!(curve.len() < x.len());
//! assert!(max_deviation(&x, &y, &curve.mask).unwrap() <= 1e-3);
//! ```

mod cpu;
pub mod impl_generic;
mod traits;

#[cfg(feature = "cuda")]
mod cuda;
#[cfg(feature = "wgpu")]
mod wgpu;

mod error;
mod greedy;
mod mask;
mod types;
mod verify;

pub use error::{SparsifyError, SparsifyResult};
pub use greedy::{sparsify, sparsify_with};
pub use mask::RetentionMask;
pub use traits::SparsifyAlgorithms;
pub use types::{BracketStrategy, Sparsified, SparsifiedTensors, SparsifyOptions};
pub use verify::max_deviation;
