//! Helper functions for CPU buffer operations
//!
//! CPU "device" memory is host heap memory, so kernels work on plain slices.
//! These helpers produce those slices from buffers.

use super::CpuRuntime;
use crate::buffer::DeviceBuffer;

/// Borrow a CPU buffer's elements
#[inline]
pub(crate) fn buffer_slice(buf: &DeviceBuffer<CpuRuntime>) -> &[f32] {
    if buf.is_empty() {
        return &[];
    }
    // SAFETY: a non-empty CPU buffer owns `len` initialised, 64-byte aligned
    // f32 elements at `ptr`; the shared borrow of the buffer prevents writes.
    unsafe { std::slice::from_raw_parts(buf.ptr() as *const f32, buf.len()) }
}

/// Mutably borrow a CPU buffer's elements
#[inline]
pub(crate) fn buffer_slice_mut(buf: &mut DeviceBuffer<CpuRuntime>) -> &mut [f32] {
    if buf.is_empty() {
        return &mut [];
    }
    // SAFETY: as above; the exclusive borrow of the sole owner rules out any
    // other live view of this allocation.
    unsafe { std::slice::from_raw_parts_mut(buf.ptr() as *mut f32, buf.len()) }
}
