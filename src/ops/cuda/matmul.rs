//! CUDA implementation of matrix multiplication operations.

use super::check_device;
use crate::buffer::DeviceBuffer;
use crate::error::Result;
use crate::ops::{MatmulOps, validate_matmul_dims};
use crate::runtime::cuda::kernels::launch_matmul;
use crate::runtime::cuda::{CudaClient, CudaRuntime};

/// MatmulOps implementation for CUDA runtime.
impl MatmulOps<CudaRuntime> for CudaClient {
    fn matmul(
        &self,
        a: &DeviceBuffer<CudaRuntime>,
        b: &DeviceBuffer<CudaRuntime>,
        out: &mut DeviceBuffer<CudaRuntime>,
        m: usize,
        n: usize,
        p: usize,
    ) -> Result<()> {
        check_device(self, &[a, b, &*out])?;
        validate_matmul_dims(a.len(), b.len(), out.len(), m, n, p)?;
        if out.is_empty() {
            return Ok(());
        }
        unsafe {
            launch_matmul(
                &self.context,
                &self.stream,
                self.device.index,
                self.matmul_strategy(),
                a.ptr(),
                b.ptr(),
                out.ptr(),
                m,
                n,
                p,
            )?;
        }
        out.mark_pending();
        Ok(())
    }
}
