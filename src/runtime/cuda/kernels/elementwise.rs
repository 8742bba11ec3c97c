//! Element-wise kernel launchers

use cudarc::driver::PushKernelArg;
use cudarc::driver::safe::{CudaContext, CudaStream};
use std::sync::Arc;

use super::loader::{get_kernel_function, get_or_load_module, launch_config, launch_error, modules};
use crate::error::Result;
use crate::ops::{EwiseOp, ScalarOp, UnaryOp};
use crate::runtime::LaunchGrid;

/// Launch a binary kernel: `out[i] = op(a[i], b[i])`
///
/// # Safety
///
/// All pointers must be valid device memory holding at least `numel` f32
/// values each.
#[allow(clippy::too_many_arguments)]
pub unsafe fn launch_ewise(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    op: EwiseOp,
    a_ptr: u64,
    b_ptr: u64,
    out_ptr: u64,
    numel: usize,
) -> Result<()> {
    let module = get_or_load_module(context, device_index, modules::ELEMENTWISE)?;
    let func = get_kernel_function(&module, op.kernel_name())?;
    let grid = LaunchGrid::for_elements(numel);
    let n = numel as u64;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&a_ptr);
    builder.arg(&b_ptr);
    builder.arg(&out_ptr);
    builder.arg(&n);
    unsafe { builder.launch(launch_config(grid)) }
        .map_err(|e| launch_error(op.kernel_name(), e))?;
    Ok(())
}

/// Launch a scalar kernel: `out[i] = op(a[i], value)`
///
/// # Safety
///
/// Both pointers must be valid device memory holding at least `numel` f32
/// values each.
#[allow(clippy::too_many_arguments)]
pub unsafe fn launch_scalar(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    op: ScalarOp,
    a_ptr: u64,
    value: f32,
    out_ptr: u64,
    numel: usize,
) -> Result<()> {
    let module = get_or_load_module(context, device_index, modules::ELEMENTWISE)?;
    let func = get_kernel_function(&module, op.kernel_name())?;
    let grid = LaunchGrid::for_elements(numel);
    let n = numel as u64;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&a_ptr);
    builder.arg(&value);
    builder.arg(&out_ptr);
    builder.arg(&n);
    unsafe { builder.launch(launch_config(grid)) }
        .map_err(|e| launch_error(op.kernel_name(), e))?;
    Ok(())
}

/// Launch a unary kernel: `out[i] = op(a[i])`
///
/// # Safety
///
/// Both pointers must be valid device memory holding at least `numel` f32
/// values each.
pub unsafe fn launch_unary(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    op: UnaryOp,
    a_ptr: u64,
    out_ptr: u64,
    numel: usize,
) -> Result<()> {
    let module = get_or_load_module(context, device_index, modules::ELEMENTWISE)?;
    let func = get_kernel_function(&module, op.kernel_name())?;
    let grid = LaunchGrid::for_elements(numel);
    let n = numel as u64;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&a_ptr);
    builder.arg(&out_ptr);
    builder.arg(&n);
    unsafe { builder.launch(launch_config(grid)) }
        .map_err(|e| launch_error(op.kernel_name(), e))?;
    Ok(())
}
