//! CPU implementation of reduction operations.

use crate::buffer::DeviceBuffer;
use crate::error::Result;
use crate::ops::{ReduceOp, ReduceOps, validate_reduce};
use crate::runtime::cpu::{
    CpuClient, CpuRuntime,
    helpers::{buffer_slice, buffer_slice_mut},
    kernels,
};

/// ReduceOps implementation for CPU runtime.
impl ReduceOps<CpuRuntime> for CpuClient {
    fn reduce(
        &self,
        op: ReduceOp,
        a: &DeviceBuffer<CpuRuntime>,
        out: &mut DeviceBuffer<CpuRuntime>,
        reduce_size: usize,
    ) -> Result<()> {
        let segments = validate_reduce(a.len(), out.len(), reduce_size)?;
        if segments == 0 {
            return Ok(());
        }
        kernels::reduce_kernel(op, buffer_slice(a), buffer_slice_mut(out), reduce_size);
        out.mark_pending();
        Ok(())
    }
}
