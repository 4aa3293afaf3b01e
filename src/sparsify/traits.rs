//! Sparsification algorithm trait.

use crate::sparsify::error::SparsifyResult;
use crate::sparsify::types::{SparsifiedTensors, SparsifyOptions};
use numr::dtype::DType;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Curve sparsification on numr tensors.
///
/// Implemented for every numr client (CPU always, CUDA and WebGPU behind their
/// features). The pass itself is inherently sequential and runs on the host; the
/// retained samples are returned on the client's device in the input dtype.
pub trait SparsifyAlgorithms<R: Runtime<DType = DType>> {
    /// Sparsify a sampled curve.
    ///
    /// # Arguments
    ///
    /// * `x` - 1D tensor of sample x coordinates (strictly increasing, F32 or F64)
    /// * `y` - 1D tensor of sample y values, same length and dtype as `x`
    /// * `options` - Tolerance and bracket strategy
    ///
    /// # Returns
    ///
    /// Retained x and y samples plus the retention mask over the input.
    fn sparsify(
        &self,
        x: &Tensor<R>,
        y: &Tensor<R>,
        options: &SparsifyOptions,
    ) -> SparsifyResult<SparsifiedTensors<R>>;
}
