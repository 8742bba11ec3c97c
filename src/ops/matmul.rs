//! Matrix multiplication helpers
//!
//! The actual operation is defined in the [`MatmulOps`](super::MatmulOps) trait.

use crate::error::{Error, Result};

/// Validate operand lengths for `out (m×p) = a (m×n) @ b (n×p)`
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] naming the first operand whose length
/// disagrees with the dimensions, or [`Error::InvalidArgument`] if a product
/// of dimensions overflows.
pub fn validate_matmul_dims(
    a_len: usize,
    b_len: usize,
    out_len: usize,
    m: usize,
    n: usize,
    p: usize,
) -> Result<()> {
    let checks = [(a_len, m, n), (b_len, n, p), (out_len, m, p)];
    for (len, rows, cols) in checks {
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            Error::invalid_argument("dims", format!("{} x {} overflows usize", rows, cols))
        })?;
        if len != expected {
            return Err(Error::shape_mismatch(&[rows, cols], &[len]));
        }
    }
    Ok(())
}
