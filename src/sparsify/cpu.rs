//! CPU implementation of sparsification.

use crate::sparsify::error::SparsifyResult;
use crate::sparsify::impl_generic::sparsify_impl;
use crate::sparsify::traits::SparsifyAlgorithms;
use crate::sparsify::types::{SparsifiedTensors, SparsifyOptions};
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl SparsifyAlgorithms<CpuRuntime> for CpuClient {
    fn sparsify(
        &self,
        x: &Tensor<CpuRuntime>,
        y: &Tensor<CpuRuntime>,
        options: &SparsifyOptions,
    ) -> SparsifyResult<SparsifiedTensors<CpuRuntime>> {
        sparsify_impl(self, x, y, options)
    }
}
