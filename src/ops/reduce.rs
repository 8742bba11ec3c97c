//! Reduction operation helpers
//!
//! Reductions fold contiguous segments of `reduce_size` elements into one
//! output element each. The actual operations are defined in the
//! [`ReduceOps`](super::ReduceOps) trait.

use crate::error::{Error, Result};

/// Reduction operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReduceOp {
    /// Maximum element, seeded from the first element of the segment
    Max,
    /// Sum of elements, starting from 0
    Sum,
}

impl ReduceOp {
    /// Short operation name
    pub fn name(self) -> &'static str {
        match self {
            ReduceOp::Max => "max",
            ReduceOp::Sum => "sum",
        }
    }

    /// Entry point of the device kernel
    pub fn kernel_name(self) -> &'static str {
        match self {
            ReduceOp::Max => "reduce_max",
            ReduceOp::Sum => "reduce_sum",
        }
    }

    /// Serially fold one segment, first element to last
    ///
    /// Max has no identity: an empty segment yields NaN. Validated launches
    /// never pass one.
    #[inline]
    pub fn fold(self, segment: &[f32]) -> f32 {
        match self {
            ReduceOp::Max => match segment.split_first() {
                Some((&first, rest)) => rest.iter().fold(first, |acc, &x| acc.max(x)),
                None => f32::NAN,
            },
            ReduceOp::Sum => segment.iter().fold(0.0f32, |acc, &x| acc + x),
        }
    }
}

/// Validate a segmented reduction and return the number of segments
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `reduce_size` is zero or does not divide
///   `input_len`
/// - [`Error::ShapeMismatch`] if `output_len` is not `input_len / reduce_size`
pub fn validate_reduce(input_len: usize, output_len: usize, reduce_size: usize) -> Result<usize> {
    if reduce_size == 0 {
        return Err(Error::invalid_argument(
            "reduce_size",
            "segment length must be at least 1",
        ));
    }
    if input_len % reduce_size != 0 {
        return Err(Error::invalid_argument(
            "reduce_size",
            format!(
                "input of {} elements is not a multiple of {}",
                input_len, reduce_size
            ),
        ));
    }
    let segments = input_len / reduce_size;
    if output_len != segments {
        return Err(Error::shape_mismatch(&[segments], &[output_len]));
    }
    Ok(segments)
}
