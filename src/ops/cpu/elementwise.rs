//! CPU implementation of element-wise operations.

use crate::buffer::DeviceBuffer;
use crate::error::Result;
use crate::ops::{EwiseOp, EwiseOps, ScalarOp, ScalarOps, UnaryOp, UnaryOps, validate_same_len};
use crate::runtime::cpu::{
    CpuClient, CpuRuntime,
    helpers::{buffer_slice, buffer_slice_mut},
    kernels,
};

/// EwiseOps implementation for CPU runtime.
impl EwiseOps<CpuRuntime> for CpuClient {
    fn ewise(
        &self,
        op: EwiseOp,
        a: &DeviceBuffer<CpuRuntime>,
        b: &DeviceBuffer<CpuRuntime>,
        out: &mut DeviceBuffer<CpuRuntime>,
    ) -> Result<()> {
        validate_same_len(a.len(), &[b.len(), out.len()])?;
        kernels::ewise_kernel(op, buffer_slice(a), buffer_slice(b), buffer_slice_mut(out));
        out.mark_pending();
        Ok(())
    }
}

/// ScalarOps implementation for CPU runtime.
impl ScalarOps<CpuRuntime> for CpuClient {
    fn scalar(
        &self,
        op: ScalarOp,
        a: &DeviceBuffer<CpuRuntime>,
        value: f32,
        out: &mut DeviceBuffer<CpuRuntime>,
    ) -> Result<()> {
        validate_same_len(a.len(), &[out.len()])?;
        kernels::scalar_kernel(op, buffer_slice(a), value, buffer_slice_mut(out));
        out.mark_pending();
        Ok(())
    }
}

/// UnaryOps implementation for CPU runtime.
impl UnaryOps<CpuRuntime> for CpuClient {
    fn unary(
        &self,
        op: UnaryOp,
        a: &DeviceBuffer<CpuRuntime>,
        out: &mut DeviceBuffer<CpuRuntime>,
    ) -> Result<()> {
        validate_same_len(a.len(), &[out.len()])?;
        kernels::unary_kernel(op, buffer_slice(a), buffer_slice_mut(out));
        out.mark_pending();
        Ok(())
    }
}
