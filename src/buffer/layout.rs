//! Strided layout: shape, strides, and offset of a view into a flat buffer

use super::shape::{MAX_DIMS, ShapeVector};
use crate::error::{Error, Result};
use std::fmt;

/// Map a linear (contiguous) position to a strided element address
///
/// Decomposes `gid` into mixed-radix coordinates using `shape` (last
/// dimension fastest, i.e. row-major) and recombines them with `strides`:
///
/// ```text
/// addr = offset + Σ_d strides[d] * ((gid / Π_{d' > d} shape[d']) mod shape[d])
/// ```
///
/// This is the same decomposition every layout kernel performs per work-item;
/// the CUDA kernels carry an identical `get_offset` device function.
///
/// `gid` must be below `shape.numel()` and the view must not address below
/// element zero (see [`StridedLayout::check_bounds`]).
#[inline]
pub fn strided_offset(
    gid: usize,
    shape: &ShapeVector,
    strides: &ShapeVector,
    offset: usize,
) -> usize {
    debug_assert!(gid < shape.numel(), "gid {} out of range", gid);
    let dims = shape.as_slice();
    let steps = strides.as_slice();

    let mut rem = gid as i64;
    let mut addr = offset as i64;
    for d in (0..dims.len()).rev() {
        let dim = dims[d] as i64;
        addr += steps[d] as i64 * (rem % dim);
        rem /= dim;
    }
    addr as usize
}

/// Shape, strides, and base offset of a (possibly non-contiguous) view
///
/// Strides are in elements, not bytes. The host-side array abstraction owns
/// these values; the engine receives them fresh on every call.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct StridedLayout {
    shape: ShapeVector,
    strides: ShapeVector,
    offset: usize,
}

impl StridedLayout {
    /// Create a layout with explicit shape, strides, and offset
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionLimit`] if either vector has more than 8 entries
    /// - [`Error::ShapeMismatch`] if shape and strides differ in rank
    pub fn new(shape: &[usize], strides: &[isize], offset: usize) -> Result<Self> {
        let shape = ShapeVector::from_shape(shape)?;
        let strides = ShapeVector::from_strides(strides)?;
        Self::from_vectors(shape, strides, offset)
    }

    /// Create a layout from prebuilt shape vectors
    ///
    /// # Errors
    ///
    /// - [`Error::ShapeMismatch`] if shape and strides differ in rank
    /// - [`Error::InvalidArgument`] if the element count does not fit in a
    ///   `usize` or the addressed range does not fit in an `i64`
    pub fn from_vectors(shape: ShapeVector, strides: ShapeVector, offset: usize) -> Result<Self> {
        if shape.len() != strides.len() {
            return Err(Error::shape_mismatch(&[shape.len()], &[strides.len()]));
        }
        if shape.checked_numel().is_none() {
            return Err(Error::invalid_argument(
                "shape",
                format!("element count of {:?} overflows usize", shape),
            ));
        }
        let layout = Self {
            shape,
            strides,
            offset,
        };
        layout.checked_span().ok_or_else(|| {
            Error::invalid_argument("strides", format!("{:?} addresses overflow i64", layout))
        })?;
        Ok(layout)
    }

    /// Create a contiguous (row-major, zero offset) layout for a shape
    ///
    /// # Errors
    ///
    /// Fails like [`StridedLayout::new`] when a row-major stride does not fit
    /// in an `i32` or the element count overflows.
    pub fn contiguous(shape: &[usize]) -> Result<Self> {
        let shape = ShapeVector::from_shape(shape)?;
        let mut strides = [0isize; MAX_DIMS];
        let mut acc = 1isize;
        for (d, &dim) in shape.iter().enumerate().rev() {
            strides[d] = acc;
            acc = acc.saturating_mul(dim.max(0) as isize);
        }
        let strides = ShapeVector::from_strides(&strides[..shape.len()])?;
        Self::from_vectors(shape, strides, 0)
    }

    /// Get the shape vector
    #[inline]
    pub fn shape(&self) -> &ShapeVector {
        &self.shape
    }

    /// Get the stride vector
    #[inline]
    pub fn strides(&self) -> &ShapeVector {
        &self.strides
    }

    /// Get the base offset in elements
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of dimensions
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of logical elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// True if logical order equals storage order with unit stride and no offset
    ///
    /// Dimensions of size 1 may carry any stride.
    pub fn is_contiguous(&self) -> bool {
        if self.offset != 0 {
            return false;
        }
        let mut expected = 1i64;
        for (&dim, &stride) in self.shape.iter().zip(self.strides.iter()).rev() {
            if dim != 1 && stride as i64 != expected {
                return false;
            }
            expected = expected.saturating_mul(dim as i64);
        }
        true
    }

    /// Element address of the `gid`-th logical element (the Index Mapper)
    #[inline]
    pub fn offset_of(&self, gid: usize) -> usize {
        strided_offset(gid, &self.shape, &self.strides, self.offset)
    }

    /// Lowest and highest element addresses the view touches
    ///
    /// Returns `None` for views with no elements.
    pub fn span(&self) -> Option<(i64, i64)> {
        self.checked_span().flatten()
    }

    // Outer None: the range overflows i64. Inner None: the view is empty.
    fn checked_span(&self) -> Option<Option<(i64, i64)>> {
        if self.numel() == 0 {
            return Some(None);
        }
        let mut lo = i64::try_from(self.offset).ok()?;
        let mut hi = lo;
        for (&dim, &stride) in self.shape.iter().zip(self.strides.iter()) {
            let reach = (dim as i64 - 1) * stride as i64;
            if reach < 0 {
                lo = lo.checked_add(reach)?;
            } else {
                hi = hi.checked_add(reach)?;
            }
        }
        Some(Some((lo, hi)))
    }

    /// Reject views that would read or write outside a buffer of `len` elements
    pub fn check_bounds(&self, len: usize) -> Result<()> {
        let Some((lo, hi)) = self.span() else {
            return Ok(());
        };
        if lo < 0 {
            return Err(Error::invalid_argument(
                "offset",
                format!("view reaches element {} below the buffer start", lo),
            ));
        }
        if hi as u64 >= len as u64 {
            return Err(Error::IndexOutOfBounds {
                index: hi as usize,
                size: len,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for StridedLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StridedLayout")
            .field("shape", &self.shape)
            .field("strides", &self.strides)
            .field("offset", &self.offset)
            .finish()
    }
}
