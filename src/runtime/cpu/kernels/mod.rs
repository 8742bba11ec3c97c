//! CPU kernels
//!
//! Each kernel mirrors its device counterpart: the work-item space is split
//! into groups of [`BLOCK_SIZE`] and each work-item `gid` computes one output.
//! With the `rayon` feature, groups run on the global thread pool once a
//! launch is large enough to amortize the scheduling overhead.

pub mod elementwise;
pub mod layout;
pub mod matmul;
pub mod reduce;

pub use elementwise::{ewise_kernel, scalar_kernel, unary_kernel};
pub use layout::{compact_kernel, ewise_setitem_kernel, fill_kernel, scalar_setitem_kernel};
pub use matmul::{matmul_naive_kernel, matmul_tiled_kernel};
pub use reduce::reduce_kernel;

use crate::runtime::{BLOCK_SIZE, LaunchGrid};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

const GROUP: usize = BLOCK_SIZE as usize;

/// Launches below this many work-items run on the calling thread
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 4096;

/// Compute `out[gid] = body(gid)` for every position of `out`
///
/// Used by kernels whose work-items each own one contiguous output element.
pub(crate) fn launch_map<F>(out: &mut [f32], body: F)
where
    F: Fn(usize) -> f32 + Sync,
{
    #[cfg(feature = "rayon")]
    if out.len() >= PARALLEL_THRESHOLD {
        out.par_chunks_mut(GROUP)
            .enumerate()
            .for_each(|(group, chunk)| {
                let base = group * GROUP;
                for (i, o) in chunk.iter_mut().enumerate() {
                    *o = body(base + i);
                }
            });
        return;
    }

    for (gid, o) in out.iter_mut().enumerate() {
        *o = body(gid);
    }
}

/// Run `body(gid)` for every work-item of `grid`
///
/// Used by kernels whose work-items write through shared, non-contiguous
/// destinations; `body` must be safe to call concurrently.
pub(crate) fn launch_each<F>(grid: LaunchGrid, body: F)
where
    F: Fn(usize) + Sync,
{
    let n = grid.work_items;
    let run_group = |group: usize| {
        let start = group * GROUP;
        let end = (start + GROUP).min(n);
        for gid in start..end {
            body(gid);
        }
    };

    #[cfg(feature = "rayon")]
    if n >= PARALLEL_THRESHOLD {
        (0..grid.groups as usize).into_par_iter().for_each(run_group);
        return;
    }

    (0..grid.groups as usize).for_each(run_group);
}
