//! ShapeVector: fixed-capacity shape/stride metadata passed by value into kernels

use crate::error::{Error, Result};
use std::fmt;
use std::ops::Deref;

/// Maximum number of dimensions a kernel parameter can carry
pub const MAX_DIMS: usize = 8;

/// Fixed-capacity vector of signed 32-bit integers
///
/// Used for both shapes (dimension sizes) and strides (element offsets per
/// dimension). The layout matches the `ShapeVector` struct declared in the
/// CUDA kernels, so it can be pushed as a by-value launch argument:
///
/// ```text
/// struct ShapeVector { uint32_t len; int32_t data[8]; };
/// ```
///
/// Construction from a longer sequence fails with [`Error::DimensionLimit`];
/// entries are never silently truncated.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeVector {
    len: u32,
    data: [i32; MAX_DIMS],
}

impl ShapeVector {
    /// Create a shape vector from raw signed entries
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionLimit`] if `values` has more than [`MAX_DIMS`] entries.
    pub fn new(values: &[i32]) -> Result<Self> {
        if values.len() > MAX_DIMS {
            return Err(Error::DimensionLimit {
                ndim: values.len(),
                max: MAX_DIMS,
            });
        }
        let mut data = [0i32; MAX_DIMS];
        data[..values.len()].copy_from_slice(values);
        Ok(Self {
            len: values.len() as u32,
            data,
        })
    }

    /// Create a shape vector from dimension sizes
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionLimit`] for more than [`MAX_DIMS`] dimensions and
    /// [`Error::InvalidArgument`] if a dimension does not fit in an `i32`.
    pub fn from_shape(shape: &[usize]) -> Result<Self> {
        Self::check_rank(shape.len())?;
        let mut data = [0i32; MAX_DIMS];
        for (slot, &dim) in data.iter_mut().zip(shape) {
            *slot = i32::try_from(dim).map_err(|_| {
                Error::invalid_argument("shape", format!("dimension {} exceeds i32::MAX", dim))
            })?;
        }
        Ok(Self {
            len: shape.len() as u32,
            data,
        })
    }

    /// Create a shape vector from element strides
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionLimit`] for more than [`MAX_DIMS`] entries and
    /// [`Error::InvalidArgument`] if a stride does not fit in an `i32`.
    pub fn from_strides(strides: &[isize]) -> Result<Self> {
        Self::check_rank(strides.len())?;
        let mut data = [0i32; MAX_DIMS];
        for (slot, &stride) in data.iter_mut().zip(strides) {
            *slot = i32::try_from(stride).map_err(|_| {
                Error::invalid_argument("strides", format!("stride {} does not fit in i32", stride))
            })?;
        }
        Ok(Self {
            len: strides.len() as u32,
            data,
        })
    }

    /// Row-major strides for this vector interpreted as a shape
    pub fn contiguous_strides(&self) -> Self {
        let mut data = [0i32; MAX_DIMS];
        let mut acc = 1i32;
        for d in (0..self.len()).rev() {
            data[d] = acc;
            acc = acc.saturating_mul(self.data[d]);
        }
        Self {
            len: self.len,
            data,
        }
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True if the vector has no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// View the populated entries as a slice
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data[..self.len as usize]
    }

    /// Product of the entries, interpreting this vector as a shape
    ///
    /// The empty product is 1 (a 0-dimensional view has one element).
    /// Negative entries count as zero. Saturates at `usize::MAX`; use
    /// [`checked_numel`](Self::checked_numel) to detect overflow.
    pub fn numel(&self) -> usize {
        self.checked_numel().unwrap_or(usize::MAX)
    }

    /// Product of the entries, or `None` if it does not fit in a `usize`
    pub fn checked_numel(&self) -> Option<usize> {
        let dims = self.as_slice();
        if dims.iter().any(|&d| d <= 0) {
            return Some(0);
        }
        dims.iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d as usize))
    }

    fn check_rank(ndim: usize) -> Result<()> {
        if ndim > MAX_DIMS {
            return Err(Error::DimensionLimit {
                ndim,
                max: MAX_DIMS,
            });
        }
        Ok(())
    }
}

impl Deref for ShapeVector {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl fmt::Debug for ShapeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_slice())
    }
}

// SAFETY: ShapeVector is #[repr(C)], Copy, and contains only plain integers,
// so its bytes can be pushed directly as a kernel argument.
#[cfg(feature = "cuda")]
unsafe impl cudarc::driver::DeviceRepr for ShapeVector {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shape() {
        let sv = ShapeVector::from_shape(&[2, 3, 4]).unwrap();
        assert_eq!(sv.len(), 3);
        assert_eq!(sv.as_slice(), &[2, 3, 4]);
        assert_eq!(sv.numel(), 24);
    }

    #[test]
    fn test_empty_is_scalar() {
        let sv = ShapeVector::from_shape(&[]).unwrap();
        assert!(sv.is_empty());
        assert_eq!(sv.numel(), 1);
    }

    #[test]
    fn test_eight_dims_accepted() {
        let sv = ShapeVector::from_shape(&[1; MAX_DIMS]).unwrap();
        assert_eq!(sv.len(), MAX_DIMS);
    }

    #[test]
    fn test_nine_dims_rejected() {
        let err = ShapeVector::from_shape(&[1; 9]).unwrap_err();
        assert!(matches!(err, Error::DimensionLimit { ndim: 9, max: 8 }));

        let err = ShapeVector::from_strides(&[1; 9]).unwrap_err();
        assert!(matches!(err, Error::DimensionLimit { ndim: 9, .. }));

        assert!(ShapeVector::new(&[0; 9]).is_err());
    }

    #[test]
    fn test_negative_strides() {
        let sv = ShapeVector::from_strides(&[-4, 1]).unwrap();
        assert_eq!(sv.as_slice(), &[-4, 1]);
    }

    #[test]
    fn test_overflowing_entry_rejected() {
        let err = ShapeVector::from_shape(&[usize::MAX]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "shape", .. }));
    }

    #[test]
    fn test_numel_overflow_detected() {
        let sv = ShapeVector::from_shape(&[i32::MAX as usize; 3]).unwrap();
        assert_eq!(sv.checked_numel(), None);
        assert_eq!(sv.numel(), usize::MAX);

        let big = i32::MAX as usize;
        let zero = ShapeVector::from_shape(&[big, big, big, 0]).unwrap();
        assert_eq!(zero.checked_numel(), Some(0));
    }

    #[test]
    fn test_contiguous_strides() {
        let sv = ShapeVector::from_shape(&[2, 3, 4]).unwrap();
        assert_eq!(sv.contiguous_strides().as_slice(), &[12, 4, 1]);
    }

    #[test]
    fn test_kernel_layout() {
        assert_eq!(std::mem::size_of::<ShapeVector>(), 4 + 4 * MAX_DIMS);
        let sv = ShapeVector::from_shape(&[5, 7]).unwrap();
        let words: &[u32] = bytemuck::cast_slice(bytemuck::bytes_of(&sv));
        assert_eq!(&words[..3], &[2, 5, 7]);
    }
}
