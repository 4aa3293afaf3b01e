//! WebGPU implementation of sparsification (delegates to generic implementation)

use crate::sparsify::error::SparsifyResult;
use crate::sparsify::impl_generic::sparsify_impl;
use crate::sparsify::traits::SparsifyAlgorithms;
use crate::sparsify::types::{SparsifiedTensors, SparsifyOptions};
use numr::runtime::wgpu::{WgpuClient, WgpuRuntime};
use numr::tensor::Tensor;

impl SparsifyAlgorithms<WgpuRuntime> for WgpuClient {
    fn sparsify(
        &self,
        x: &Tensor<WgpuRuntime>,
        y: &Tensor<WgpuRuntime>,
        options: &SparsifyOptions,
    ) -> SparsifyResult<SparsifiedTensors<WgpuRuntime>> {
        sparsify_impl(self, x, y, options)
    }
}
