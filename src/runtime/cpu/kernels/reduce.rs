//! Segmented reduction kernel

use super::launch_map;
use crate::ops::ReduceOp;

/// Fold each `reduce_size` segment of `a` into one element of `out`
///
/// One work-item per segment; each folds its segment serially. `a.len()` must
/// equal `out.len() * reduce_size` and `reduce_size` must be non-zero.
pub fn reduce_kernel(op: ReduceOp, a: &[f32], out: &mut [f32], reduce_size: usize) {
    debug_assert_eq!(a.len(), out.len() * reduce_size);
    launch_map(out, |g| {
        let start = g * reduce_size;
        op.fold(&a[start..start + reduce_size])
    });
}
