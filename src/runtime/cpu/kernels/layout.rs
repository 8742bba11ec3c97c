//! Layout kernels: fill, compact, and strided assignment
//!
//! Strided addresses come from the Index Mapper
//! ([`StridedLayout::offset_of`]). Scatter kernels write through relaxed
//! atomics so that views with overlapping strides stay free of data races;
//! which of the colliding writes lands is unspecified, as on the device.

use super::{launch_each, launch_map};
use crate::buffer::StridedLayout;
use crate::runtime::LaunchGrid;
use std::sync::atomic::{AtomicU32, Ordering};

/// `out[i] = value` for every element
pub fn fill_kernel(out: &mut [f32], value: f32) {
    launch_map(out, |_| value);
}

/// `dst[gid] = src[layout.offset_of(gid)]`
///
/// `dst.len()` must equal `layout.numel()` and the view must lie inside `src`.
pub fn compact_kernel(src: &[f32], dst: &mut [f32], layout: &StridedLayout) {
    debug_assert_eq!(dst.len(), layout.numel());
    launch_map(dst, |gid| src[layout.offset_of(gid)]);
}

/// `dst[layout.offset_of(gid)] = src[gid]` for every `gid < src.len()`
pub fn ewise_setitem_kernel(src: &[f32], dst: &mut [f32], layout: &StridedLayout) {
    debug_assert_eq!(src.len(), layout.numel());
    let cells = as_atomic(dst);
    launch_each(LaunchGrid::for_elements(src.len()), |gid| {
        cells[layout.offset_of(gid)].store(src[gid].to_bits(), Ordering::Relaxed);
    });
}

/// `dst[layout.offset_of(gid)] = value` for every `gid < size`
pub fn scalar_setitem_kernel(size: usize, value: f32, dst: &mut [f32], layout: &StridedLayout) {
    debug_assert_eq!(size, layout.numel());
    let cells = as_atomic(dst);
    let bits = value.to_bits();
    launch_each(LaunchGrid::for_elements(size), |gid| {
        cells[layout.offset_of(gid)].store(bits, Ordering::Relaxed);
    });
}

fn as_atomic(dst: &mut [f32]) -> &[AtomicU32] {
    // SAFETY: AtomicU32 has the same size and alignment as f32, and the
    // exclusive borrow guarantees no non-atomic access while the view lives.
    unsafe { &*(dst as *mut [f32] as *const [AtomicU32]) }
}
