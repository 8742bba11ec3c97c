//! CUDA implementation of layout operations.

use super::check_device;
use crate::buffer::{DeviceBuffer, StridedLayout};
use crate::error::Result;
use crate::ops::{LayoutOps, validate_compact, validate_ewise_setitem, validate_scalar_setitem};
use crate::runtime::cuda::kernels::{
    launch_compact, launch_ewise_setitem, launch_fill, launch_scalar_setitem,
};
use crate::runtime::cuda::{CudaClient, CudaRuntime};

/// LayoutOps implementation for CUDA runtime.
impl LayoutOps<CudaRuntime> for CudaClient {
    fn fill(&self, out: &mut DeviceBuffer<CudaRuntime>, value: f32) -> Result<()> {
        check_device(self, &[&*out])?;
        if out.is_empty() {
            return Ok(());
        }
        unsafe {
            launch_fill(
                &self.context,
                &self.stream,
                self.device.index,
                out.ptr(),
                value,
                out.len(),
            )?;
        }
        out.mark_pending();
        Ok(())
    }

    fn compact(
        &self,
        src: &DeviceBuffer<CudaRuntime>,
        dst: &mut DeviceBuffer<CudaRuntime>,
        layout: &StridedLayout,
    ) -> Result<()> {
        check_device(self, &[src, &*dst])?;
        let numel = validate_compact(src.len(), dst.len(), layout)?;
        if numel == 0 {
            return Ok(());
        }
        unsafe {
            launch_compact(
                &self.context,
                &self.stream,
                self.device.index,
                src.ptr(),
                dst.ptr(),
                layout,
            )?;
        }
        dst.mark_pending();
        Ok(())
    }

    fn ewise_setitem(
        &self,
        src: &DeviceBuffer<CudaRuntime>,
        dst: &mut DeviceBuffer<CudaRuntime>,
        layout: &StridedLayout,
    ) -> Result<()> {
        check_device(self, &[src, &*dst])?;
        let numel = validate_ewise_setitem(src.len(), dst.len(), layout)?;
        if numel == 0 {
            return Ok(());
        }
        unsafe {
            launch_ewise_setitem(
                &self.context,
                &self.stream,
                self.device.index,
                src.ptr(),
                dst.ptr(),
                layout,
            )?;
        }
        dst.mark_pending();
        Ok(())
    }

    fn scalar_setitem(
        &self,
        size: usize,
        value: f32,
        dst: &mut DeviceBuffer<CudaRuntime>,
        layout: &StridedLayout,
    ) -> Result<()> {
        check_device(self, &[&*dst])?;
        if validate_scalar_setitem(size, dst.len(), layout)? == 0 {
            return Ok(());
        }
        unsafe {
            launch_scalar_setitem(
                &self.context,
                &self.stream,
                self.device.index,
                value,
                dst.ptr(),
                layout,
            )?;
        }
        dst.mark_pending();
        Ok(())
    }
}
