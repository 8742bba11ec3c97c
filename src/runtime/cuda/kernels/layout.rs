//! Layout kernel launchers: fill, compact, ewise_setitem, scalar_setitem

use cudarc::driver::PushKernelArg;
use cudarc::driver::safe::{CudaContext, CudaStream};
use std::sync::Arc;

use super::loader::{get_kernel_function, get_or_load_module, launch_config, launch_error, modules};
use crate::buffer::StridedLayout;
use crate::error::Result;
use crate::runtime::LaunchGrid;

/// Launch `fill`: `out[i] = value` for `i < numel`
///
/// # Safety
///
/// `out_ptr` must be valid device memory holding at least `numel` f32 values.
pub unsafe fn launch_fill(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    out_ptr: u64,
    value: f32,
    numel: usize,
) -> Result<()> {
    let module = get_or_load_module(context, device_index, modules::LAYOUT)?;
    let func = get_kernel_function(&module, "fill")?;
    let grid = LaunchGrid::for_elements(numel);
    let n = numel as u64;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&out_ptr);
    builder.arg(&value);
    builder.arg(&n);
    unsafe { builder.launch(launch_config(grid)) }.map_err(|e| launch_error("fill", e))?;
    Ok(())
}

/// Strided gather/scatter shared by `compact` and `ewise_setitem`
unsafe fn launch_strided_copy(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    kernel: &'static str,
    a_ptr: u64,
    out_ptr: u64,
    layout: &StridedLayout,
) -> Result<()> {
    let module = get_or_load_module(context, device_index, modules::LAYOUT)?;
    let func = get_kernel_function(&module, kernel)?;
    let grid = LaunchGrid::for_elements(layout.numel());
    let n = layout.numel() as u64;
    let shape = *layout.shape();
    let strides = *layout.strides();
    let offset = layout.offset() as u64;

    log::debug!(
        "[ndkern::cuda] {} numel={} groups={} shape={:?} strides={:?} offset={}",
        kernel,
        n,
        grid.groups,
        shape,
        strides,
        offset
    );

    let mut builder = stream.launch_builder(&func);
    builder.arg(&a_ptr);
    builder.arg(&out_ptr);
    builder.arg(&n);
    builder.arg(&shape);
    builder.arg(&strides);
    builder.arg(&offset);
    unsafe { builder.launch(launch_config(grid)) }.map_err(|e| launch_error(kernel, e))?;
    Ok(())
}

/// Launch `compact`: gather the strided view of `a` into compact `out`
///
/// # Safety
///
/// Both pointers must be valid device memory; `out` must hold
/// `layout.numel()` values and every address of `layout` must lie in `a`.
pub unsafe fn launch_compact(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    a_ptr: u64,
    out_ptr: u64,
    layout: &StridedLayout,
) -> Result<()> {
    unsafe {
        launch_strided_copy(
            context,
            stream,
            device_index,
            "compact",
            a_ptr,
            out_ptr,
            layout,
        )
    }
}

/// Launch `ewise_setitem`: scatter compact `a` into the strided view of `out`
///
/// # Safety
///
/// Both pointers must be valid device memory; `a` must hold
/// `layout.numel()` values and every address of `layout` must lie in `out`.
pub unsafe fn launch_ewise_setitem(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    a_ptr: u64,
    out_ptr: u64,
    layout: &StridedLayout,
) -> Result<()> {
    unsafe {
        launch_strided_copy(
            context,
            stream,
            device_index,
            "ewise_setitem",
            a_ptr,
            out_ptr,
            layout,
        )
    }
}

/// Launch `scalar_setitem`: write `value` at every address of the view
///
/// # Safety
///
/// `out_ptr` must be valid device memory covering every address of `layout`.
pub unsafe fn launch_scalar_setitem(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    value: f32,
    out_ptr: u64,
    layout: &StridedLayout,
) -> Result<()> {
    let module = get_or_load_module(context, device_index, modules::LAYOUT)?;
    let func = get_kernel_function(&module, "scalar_setitem")?;
    let grid = LaunchGrid::for_elements(layout.numel());
    let n = layout.numel() as u64;
    let shape = *layout.shape();
    let strides = *layout.strides();
    let offset = layout.offset() as u64;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&n);
    builder.arg(&value);
    builder.arg(&out_ptr);
    builder.arg(&shape);
    builder.arg(&strides);
    builder.arg(&offset);
    unsafe { builder.launch(launch_config(grid)) }
        .map_err(|e| launch_error("scalar_setitem", e))?;
    Ok(())
}
