//! Segmented reduction launcher

use cudarc::driver::PushKernelArg;
use cudarc::driver::safe::{CudaContext, CudaStream};
use std::sync::Arc;

use super::loader::{get_kernel_function, get_or_load_module, launch_config, launch_error, modules};
use crate::error::Result;
use crate::ops::ReduceOp;
use crate::runtime::LaunchGrid;

/// Launch a reduction over `segments` contiguous runs of `reduce_size` values
///
/// One work-item folds one segment into `out[segment]`.
///
/// # Safety
///
/// `a_ptr` must hold `segments * reduce_size` f32 values and `out_ptr`
/// `segments` values; `reduce_size` must be non-zero.
#[allow(clippy::too_many_arguments)]
pub unsafe fn launch_reduce(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    op: ReduceOp,
    a_ptr: u64,
    out_ptr: u64,
    reduce_size: usize,
    segments: usize,
) -> Result<()> {
    let module = get_or_load_module(context, device_index, modules::REDUCE)?;
    let func = get_kernel_function(&module, op.kernel_name())?;
    let grid = LaunchGrid::for_elements(segments);
    let reduce_size = reduce_size as u64;
    let n = segments as u64;

    let mut builder = stream.launch_builder(&func);
    builder.arg(&a_ptr);
    builder.arg(&out_ptr);
    builder.arg(&reduce_size);
    builder.arg(&n);
    unsafe { builder.launch(launch_config(grid)) }
        .map_err(|e| launch_error(op.kernel_name(), e))?;
    Ok(())
}
