//! Reduction operations trait.

use crate::buffer::DeviceBuffer;
use crate::error::Result;
use crate::ops::ReduceOp;
use crate::runtime::Runtime;

/// Segmented reductions over a compact buffer
///
/// The input is split into contiguous segments of `reduce_size` elements;
/// segment `g` folds into `out[g]`.
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
/// let a = DeviceBuffer::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0, 4.0], &device)?;
/// let mut out = DeviceBuffer::<CpuRuntime>::new(2, &device)?;
///
/// client.reduce_sum(&a, &mut out, 2)?;
/// assert_eq!(out.to_vec()?, vec![3.0, 7.0]);
/// # Ok::<(), ndkern::error::Error>(())
/// ```
pub trait ReduceOps<R: Runtime> {
    /// Fold each segment of `reduce_size` elements with `op`
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`](crate::error::Error::InvalidArgument) if
    ///   `reduce_size` is zero or does not divide `a.len()`
    /// - [`Error::ShapeMismatch`](crate::error::Error::ShapeMismatch) if
    ///   `out.len() != a.len() / reduce_size`
    fn reduce(
        &self,
        op: ReduceOp,
        a: &DeviceBuffer<R>,
        out: &mut DeviceBuffer<R>,
        reduce_size: usize,
    ) -> Result<()>;

    /// Maximum of each segment
    fn reduce_max(
        &self,
        a: &DeviceBuffer<R>,
        out: &mut DeviceBuffer<R>,
        reduce_size: usize,
    ) -> Result<()> {
        self.reduce(ReduceOp::Max, a, out, reduce_size)
    }

    /// Sum of each segment
    fn reduce_sum(
        &self,
        a: &DeviceBuffer<R>,
        out: &mut DeviceBuffer<R>,
        reduce_size: usize,
    ) -> Result<()> {
        self.reduce(ReduceOp::Sum, a, out, reduce_size)
    }
}
