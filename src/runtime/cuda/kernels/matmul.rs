//! Matmul kernel launcher

use cudarc::driver::PushKernelArg;
use cudarc::driver::safe::{CudaContext, CudaStream};
use std::sync::Arc;

use super::loader::{get_kernel_function, get_or_load_module, launch_config, launch_error, modules};
use crate::algorithm::{MatmulStrategy, tiled_work_items};
use crate::error::Result;
use crate::runtime::LaunchGrid;

/// Launch `out (m x p) = a (m x n) @ b (n x p)` with the given strategy
///
/// Naive launches one work-item per output element. Tiled launches one group
/// of `TILE * TILE` work-items per output tile.
///
/// # Safety
///
/// All pointers must be valid device memory holding `m * n`, `n * p` and
/// `m * p` f32 values respectively.
#[allow(clippy::too_many_arguments)]
pub unsafe fn launch_matmul(
    context: &Arc<CudaContext>,
    stream: &CudaStream,
    device_index: usize,
    strategy: MatmulStrategy,
    a_ptr: u64,
    b_ptr: u64,
    out_ptr: u64,
    m: usize,
    n: usize,
    p: usize,
) -> Result<()> {
    let kernel = strategy.kernel_name();
    let module = get_or_load_module(context, device_index, modules::MATMUL)?;
    let func = get_kernel_function(&module, kernel)?;
    let grid = match strategy {
        MatmulStrategy::Naive => LaunchGrid::for_elements(m * p),
        MatmulStrategy::Tiled => LaunchGrid::for_elements(tiled_work_items(m, p)),
    };

    log::debug!(
        "[ndkern::cuda] {} m={} n={} p={} groups={}",
        kernel,
        m,
        n,
        p,
        grid.groups
    );

    let (m, n, p) = (m as u64, n as u64, p as u64);
    let mut builder = stream.launch_builder(&func);
    builder.arg(&a_ptr);
    builder.arg(&b_ptr);
    builder.arg(&out_ptr);
    builder.arg(&m);
    builder.arg(&n);
    builder.arg(&p);
    unsafe { builder.launch(launch_config(grid)) }.map_err(|e| launch_error(kernel, e))?;
    Ok(())
}
