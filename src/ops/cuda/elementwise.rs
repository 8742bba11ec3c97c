//! CUDA implementation of element-wise operations.

use super::check_device;
use crate::buffer::DeviceBuffer;
use crate::error::Result;
use crate::ops::{EwiseOp, EwiseOps, ScalarOp, ScalarOps, UnaryOp, UnaryOps, validate_same_len};
use crate::runtime::cuda::kernels::{launch_ewise, launch_scalar, launch_unary};
use crate::runtime::cuda::{CudaClient, CudaRuntime};

/// EwiseOps implementation for CUDA runtime.
impl EwiseOps<CudaRuntime> for CudaClient {
    fn ewise(
        &self,
        op: EwiseOp,
        a: &DeviceBuffer<CudaRuntime>,
        b: &DeviceBuffer<CudaRuntime>,
        out: &mut DeviceBuffer<CudaRuntime>,
    ) -> Result<()> {
        check_device(self, &[a, b, &*out])?;
        validate_same_len(a.len(), &[b.len(), out.len()])?;
        if out.is_empty() {
            return Ok(());
        }
        unsafe {
            launch_ewise(
                &self.context,
                &self.stream,
                self.device.index,
                op,
                a.ptr(),
                b.ptr(),
                out.ptr(),
                out.len(),
            )?;
        }
        out.mark_pending();
        Ok(())
    }
}

/// ScalarOps implementation for CUDA runtime.
impl ScalarOps<CudaRuntime> for CudaClient {
    fn scalar(
        &self,
        op: ScalarOp,
        a: &DeviceBuffer<CudaRuntime>,
        value: f32,
        out: &mut DeviceBuffer<CudaRuntime>,
    ) -> Result<()> {
        check_device(self, &[a, &*out])?;
        validate_same_len(a.len(), &[out.len()])?;
        if out.is_empty() {
            return Ok(());
        }
        unsafe {
            launch_scalar(
                &self.context,
                &self.stream,
                self.device.index,
                op,
                a.ptr(),
                value,
                out.ptr(),
                out.len(),
            )?;
        }
        out.mark_pending();
        Ok(())
    }
}

/// UnaryOps implementation for CUDA runtime.
impl UnaryOps<CudaRuntime> for CudaClient {
    fn unary(
        &self,
        op: UnaryOp,
        a: &DeviceBuffer<CudaRuntime>,
        out: &mut DeviceBuffer<CudaRuntime>,
    ) -> Result<()> {
        check_device(self, &[a, &*out])?;
        validate_same_len(a.len(), &[out.len()])?;
        if out.is_empty() {
            return Ok(());
        }
        unsafe {
            launch_unary(
                &self.context,
                &self.stream,
                self.device.index,
                op,
                a.ptr(),
                out.ptr(),
                out.len(),
            )?;
        }
        out.mark_pending();
        Ok(())
    }
}
