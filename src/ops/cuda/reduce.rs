//! CUDA implementation of reduction operations.

use super::check_device;
use crate::buffer::DeviceBuffer;
use crate::error::Result;
use crate::ops::{ReduceOp, ReduceOps, validate_reduce};
use crate::runtime::cuda::kernels::launch_reduce;
use crate::runtime::cuda::{CudaClient, CudaRuntime};

/// ReduceOps implementation for CUDA runtime.
impl ReduceOps<CudaRuntime> for CudaClient {
    fn reduce(
        &self,
        op: ReduceOp,
        a: &DeviceBuffer<CudaRuntime>,
        out: &mut DeviceBuffer<CudaRuntime>,
        reduce_size: usize,
    ) -> Result<()> {
        check_device(self, &[a, &*out])?;
        let segments = validate_reduce(a.len(), out.len(), reduce_size)?;
        if segments == 0 {
            return Ok(());
        }
        unsafe {
            launch_reduce(
                &self.context,
                &self.stream,
                self.device.index,
                op,
                a.ptr(),
                out.ptr(),
                reduce_size,
                segments,
            )?;
        }
        out.mark_pending();
        Ok(())
    }
}
