//! Layout operations trait.
//!
//! Moves data between compact buffers and strided views of another buffer.

use crate::buffer::{DeviceBuffer, StridedLayout};
use crate::error::Result;
use crate::runtime::Runtime;

/// Layout operations: fill, compact, and strided assignment
///
/// Every strided access goes through the Index Mapper: the `gid`-th logical
/// element of a view lives at [`StridedLayout::offset_of`]`(gid)`.
///
/// # Example
///
/// ```
/// use ndkern::prelude::*;
/// # use ndkern::runtime::cpu::{CpuDevice, CpuRuntime};
///
/// let device = CpuDevice::new();
/// let client = CpuRuntime::default_client(&device);
///
/// // 2x3 row-major matrix, read through its transpose
/// let a = DeviceBuffer::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &device)?;
/// let mut t = DeviceBuffer::<CpuRuntime>::new(6, &device)?;
/// let view = StridedLayout::new(&[3, 2], &[1, 3], 0)?;
///
/// client.compact(&a, &mut t, &view)?;
/// assert_eq!(t.to_vec()?, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
/// # Ok::<(), ndkern::error::Error>(())
/// ```
pub trait LayoutOps<R: Runtime> {
    /// Set every element of `out` to `value`
    ///
    /// A zero-length buffer is a no-op; nothing is launched.
    fn fill(&self, out: &mut DeviceBuffer<R>, value: f32) -> Result<()>;

    /// Gather a strided view of `src` into the compact buffer `dst`
    ///
    /// `dst[gid] = src[layout.offset_of(gid)]` for every logical position.
    ///
    /// # Errors
    ///
    /// - [`Error::ShapeMismatch`](crate::error::Error::ShapeMismatch) if
    ///   `dst.len()` differs from `layout.numel()`
    /// - [`Error::IndexOutOfBounds`](crate::error::Error::IndexOutOfBounds) if
    ///   the view reaches outside `src`
    fn compact(
        &self,
        src: &DeviceBuffer<R>,
        dst: &mut DeviceBuffer<R>,
        layout: &StridedLayout,
    ) -> Result<()>;

    /// Scatter the compact buffer `src` into a strided view of `dst`
    ///
    /// `dst[layout.offset_of(gid)] = src[gid]` for every `gid < src.len()`.
    /// If the view's strides overlap, which write lands is unspecified.
    ///
    /// # Errors
    ///
    /// - [`Error::ShapeMismatch`](crate::error::Error::ShapeMismatch) if
    ///   `src.len()` differs from `layout.numel()`
    /// - [`Error::IndexOutOfBounds`](crate::error::Error::IndexOutOfBounds) if
    ///   the view reaches outside `dst`
    fn ewise_setitem(
        &self,
        src: &DeviceBuffer<R>,
        dst: &mut DeviceBuffer<R>,
        layout: &StridedLayout,
    ) -> Result<()>;

    /// Write `value` to every position of a strided view of `dst`
    ///
    /// `size` is the number of logical positions and must equal
    /// `layout.numel()`; it is checked rather than derived.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`](crate::error::Error::InvalidArgument) if
    ///   `size` disagrees with the shape
    /// - [`Error::IndexOutOfBounds`](crate::error::Error::IndexOutOfBounds) if
    ///   the view reaches outside `dst`
    fn scalar_setitem(
        &self,
        size: usize,
        value: f32,
        dst: &mut DeviceBuffer<R>,
        layout: &StridedLayout,
    ) -> Result<()>;
}
