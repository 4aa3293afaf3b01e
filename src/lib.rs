//! sparsr - Tolerance-bounded sparsification of sampled curves
//!
//! sparsr reduces a densely sampled curve to the few points a linear-interpolation
//! reader needs: every dropped sample is reproduced by the interpolant through the
//! retained samples within a caller-chosen absolute tolerance. Typical consumers are
//! calibration tables, lookup tables and sensor curves.
//!
//! Built on numr, the tensor entry point works across numr backends (CPU, CUDA,
//! WebGPU); plain slices work without any tensor setup.
//!
//! # Modules
//!
//! - [`sparsify`] - the greedy sparsification pass, its options and audit
//! - [`interpolate`] - the piecewise-linear evaluator used to read (and build) tables
//!
//! # Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `cuda`  | Enable CUDA GPU acceleration | CUDA 12.x, numr/cuda |
//! | `wgpu`  | Enable WebGPU cross-platform GPU | numr/wgpu |
//!
//! # Example
//!
//! ```
//! use sparsr::sparsify::SparsifyAlgorithms;
//! use sparsr::SparsifyOptions;
//! use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
//! use numr::tensor::Tensor;
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//!
//! let x = Tensor::<CpuRuntime>::from_slice(&[0.0, 1.0, 2.0, 3.0], &[4], &device).unwrap();
//! let y = Tensor::<CpuRuntime>::from_slice(&[0.0, 1.0, 2.0, 3.0], &[4], &device).unwrap();
//!
//! let result = client.sparsify(&x, &y, &SparsifyOptions::default()).unwrap();
//! assert_eq!(result.mask, vec![true, false, false, true]);
//! ```

pub mod interpolate;
pub mod sparsify;

// Re-export main types for convenience
pub use interpolate::{InterpolateError, InterpolateResult, LinearInterp, LinearSegment};
pub use sparsify::{
    BracketStrategy, RetentionMask, Sparsified, SparsifiedTensors, SparsifyAlgorithms,
    SparsifyError, SparsifyOptions, SparsifyResult, max_deviation, sparsify, sparsify_with,
};

// Re-export numr types that users will commonly need
pub use numr::dtype::DType;
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
