//! CUDA implementation of buffer operations.
//!
//! Every operation validates on the host, enqueues one kernel on the client
//! stream, and marks its output pending. Nothing here synchronizes.

pub mod elementwise;
pub mod layout;
pub mod matmul;
pub mod reduce;

use crate::buffer::DeviceBuffer;
use crate::error::{Error, Result};
use crate::runtime::cuda::{CudaClient, CudaRuntime};
use crate::runtime::{Device, RuntimeClient};

/// Reject buffers allocated on a different device than the client's
pub(crate) fn check_device(
    client: &CudaClient,
    buffers: &[&DeviceBuffer<CudaRuntime>],
) -> Result<()> {
    let device = client.device();
    match buffers.iter().find(|b| !b.device().is_same(device)) {
        Some(b) => Err(Error::invalid_argument(
            "device",
            format!(
                "buffer lives on {} but the client launches on {}",
                b.device().name(),
                device.name()
            ),
        )),
        None => Ok(()),
    }
}
