//! Layout operation helpers
//!
//! Validation shared by every backend's compact / setitem launches. All checks
//! run before any device work is issued.

use crate::buffer::StridedLayout;
use crate::error::{Error, Result};

/// Validate `compact`: strided reads from `src`, contiguous writes to `dst`
///
/// Returns the number of logical elements.
pub fn validate_compact(src_len: usize, dst_len: usize, layout: &StridedLayout) -> Result<usize> {
    let numel = layout.numel();
    if dst_len != numel {
        return Err(Error::shape_mismatch(&[numel], &[dst_len]));
    }
    layout.check_bounds(src_len)?;
    Ok(numel)
}

/// Validate `ewise_setitem`: contiguous reads from `src`, strided writes to `dst`
///
/// Returns the number of logical elements.
pub fn validate_ewise_setitem(
    src_len: usize,
    dst_len: usize,
    layout: &StridedLayout,
) -> Result<usize> {
    let numel = layout.numel();
    if src_len != numel {
        return Err(Error::shape_mismatch(&[numel], &[src_len]));
    }
    layout.check_bounds(dst_len)?;
    Ok(numel)
}

/// Validate `scalar_setitem`
///
/// The explicit logical size must agree with the product of the shape.
pub fn validate_scalar_setitem(
    size: usize,
    dst_len: usize,
    layout: &StridedLayout,
) -> Result<usize> {
    let numel = layout.numel();
    if size != numel {
        return Err(Error::invalid_argument(
            "size",
            format!("logical size {} disagrees with shape product {}", size, numel),
        ));
    }
    layout.check_bounds(dst_len)?;
    Ok(numel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transposed() -> StridedLayout {
        StridedLayout::new(&[3, 2], &[1, 3], 0).unwrap()
    }

    #[test]
    fn test_compact_checks() {
        assert_eq!(validate_compact(6, 6, &transposed()).unwrap(), 6);
        assert!(matches!(
            validate_compact(6, 5, &transposed()),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(matches!(
            validate_compact(5, 6, &transposed()),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_ewise_setitem_checks() {
        let sub = StridedLayout::new(&[2, 2], &[4, 1], 5).unwrap();
        assert_eq!(validate_ewise_setitem(4, 16, &sub).unwrap(), 4);
        assert!(validate_ewise_setitem(3, 16, &sub).is_err());
        assert!(validate_ewise_setitem(4, 8, &sub).is_err());
    }

    #[test]
    fn test_scalar_setitem_size_must_match_shape() {
        let sub = StridedLayout::new(&[2, 2], &[4, 1], 5).unwrap();
        assert_eq!(validate_scalar_setitem(4, 16, &sub).unwrap(), 4);
        assert!(matches!(
            validate_scalar_setitem(16, 16, &sub),
            Err(Error::InvalidArgument { arg: "size", .. })
        ));
    }
}
