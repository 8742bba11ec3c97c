//! CPU implementation of layout operations.

use crate::buffer::{DeviceBuffer, StridedLayout};
use crate::error::Result;
use crate::ops::{LayoutOps, validate_compact, validate_ewise_setitem, validate_scalar_setitem};
use crate::runtime::cpu::{
    CpuClient, CpuRuntime,
    helpers::{buffer_slice, buffer_slice_mut},
    kernels,
};

/// LayoutOps implementation for CPU runtime.
impl LayoutOps<CpuRuntime> for CpuClient {
    fn fill(&self, out: &mut DeviceBuffer<CpuRuntime>, value: f32) -> Result<()> {
        if out.is_empty() {
            return Ok(());
        }
        kernels::fill_kernel(buffer_slice_mut(out), value);
        out.mark_pending();
        Ok(())
    }

    fn compact(
        &self,
        src: &DeviceBuffer<CpuRuntime>,
        dst: &mut DeviceBuffer<CpuRuntime>,
        layout: &StridedLayout,
    ) -> Result<()> {
        validate_compact(src.len(), dst.len(), layout)?;
        kernels::compact_kernel(buffer_slice(src), buffer_slice_mut(dst), layout);
        dst.mark_pending();
        Ok(())
    }

    fn ewise_setitem(
        &self,
        src: &DeviceBuffer<CpuRuntime>,
        dst: &mut DeviceBuffer<CpuRuntime>,
        layout: &StridedLayout,
    ) -> Result<()> {
        validate_ewise_setitem(src.len(), dst.len(), layout)?;
        kernels::ewise_setitem_kernel(buffer_slice(src), buffer_slice_mut(dst), layout);
        dst.mark_pending();
        Ok(())
    }

    fn scalar_setitem(
        &self,
        size: usize,
        value: f32,
        dst: &mut DeviceBuffer<CpuRuntime>,
        layout: &StridedLayout,
    ) -> Result<()> {
        validate_scalar_setitem(size, dst.len(), layout)?;
        kernels::scalar_setitem_kernel(size, value, buffer_slice_mut(dst), layout);
        dst.mark_pending();
        Ok(())
    }
}
