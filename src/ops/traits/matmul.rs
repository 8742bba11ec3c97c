//! Matrix multiplication operations trait.

use crate::buffer::DeviceBuffer;
use crate::error::Result;
use crate::runtime::Runtime;

/// Matrix multiplication operations
pub trait MatmulOps<R: Runtime> {
    /// Dense product of compact row-major matrices: out = a @ b
    ///
    /// `a` is `m × n`, `b` is `n × p`, `out` is `m × p`. Any dimensions are
    /// accepted, including ones that are not multiples of the tile size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`](crate::error::Error::ShapeMismatch) if
    /// a buffer length disagrees with the dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// # use ndkern::prelude::*;
    /// # use ndkern::runtime::cpu::{CpuDevice, CpuRuntime};
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let a = DeviceBuffer::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0, 4.0], &device)?;
    /// let b = DeviceBuffer::<CpuRuntime>::from_slice(&[5.0, 6.0, 7.0, 8.0], &device)?;
    /// let mut out = DeviceBuffer::<CpuRuntime>::new(4, &device)?;
    /// client.matmul(&a, &b, &mut out, 2, 2, 2)?;
    /// assert_eq!(out.to_vec()?, vec![19.0, 22.0, 43.0, 50.0]);
    /// # Ok::<(), ndkern::error::Error>(())
    /// ```
    fn matmul(
        &self,
        a: &DeviceBuffer<R>,
        b: &DeviceBuffer<R>,
        out: &mut DeviceBuffer<R>,
        m: usize,
        n: usize,
        p: usize,
    ) -> Result<()>;
}
