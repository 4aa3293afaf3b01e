//! CUDA implementation of sparsification (delegates to generic implementation)

use crate::sparsify::error::SparsifyResult;
use crate::sparsify::impl_generic::sparsify_impl;
use crate::sparsify::traits::SparsifyAlgorithms;
use crate::sparsify::types::{SparsifiedTensors, SparsifyOptions};
use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

impl SparsifyAlgorithms<CudaRuntime> for CudaClient {
    fn sparsify(
        &self,
        x: &Tensor<CudaRuntime>,
        y: &Tensor<CudaRuntime>,
        options: &SparsifyOptions,
    ) -> SparsifyResult<SparsifiedTensors<CudaRuntime>> {
        sparsify_impl(self, x, y, options)
    }
}
