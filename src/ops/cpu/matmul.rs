//! CPU implementation of matrix multiplication operations.

use crate::algorithm::MatmulStrategy;
use crate::buffer::DeviceBuffer;
use crate::error::Result;
use crate::ops::{MatmulOps, validate_matmul_dims};
use crate::runtime::cpu::{
    CpuClient, CpuRuntime,
    helpers::{buffer_slice, buffer_slice_mut},
    kernels,
};

/// MatmulOps implementation for CPU runtime.
impl MatmulOps<CpuRuntime> for CpuClient {
    fn matmul(
        &self,
        a: &DeviceBuffer<CpuRuntime>,
        b: &DeviceBuffer<CpuRuntime>,
        out: &mut DeviceBuffer<CpuRuntime>,
        m: usize,
        n: usize,
        p: usize,
    ) -> Result<()> {
        validate_matmul_dims(a.len(), b.len(), out.len(), m, n, p)?;
        if out.is_empty() {
            return Ok(());
        }

        let (a, b, c) = (buffer_slice(a), buffer_slice(b), buffer_slice_mut(out));
        match self.matmul_strategy() {
            MatmulStrategy::Naive => kernels::matmul_naive_kernel(a, b, c, n, p),
            MatmulStrategy::Tiled => kernels::matmul_tiled_kernel(a, b, c, n, p),
        }
        out.mark_pending();
        Ok(())
    }
}
