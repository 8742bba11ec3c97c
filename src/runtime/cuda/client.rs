//! CUDA Client implementation
//!
//! CudaClient owns stream and context for direct cudarc access.
//!
//! # Thread Safety
//!
//! `CudaClient` is `Clone` and can be shared across threads. The underlying
//! CUDA context and stream are reference-counted via `Arc`.

use cudarc::driver::safe::{CudaContext, CudaStream};
use std::sync::Arc;

use super::CudaRuntime;
use super::device::CudaDevice;
use crate::algorithm::MatmulStrategy;
use crate::error::{Error, Result};
use crate::runtime::RuntimeClient;

/// CUDA Runtime Client
///
/// Owns CUDA context and stream for direct kernel launches.
///
/// # Stream Ownership
///
/// All kernels, copies, and stream-ordered allocations on a device go through
/// this one stream, which is what orders consecutive operations. Clients are
/// cached per device, so every clone shares it.
#[derive(Clone)]
pub struct CudaClient {
    /// GPU device index
    pub(crate) device: CudaDevice,

    /// CUDA context for this device (owns GPU context)
    pub(crate) context: Arc<CudaContext>,

    /// Stream on which all kernels launch
    pub(crate) stream: Arc<CudaStream>,

    matmul_strategy: MatmulStrategy,
}

impl std::fmt::Debug for CudaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CudaClient")
            .field("device", &self.device)
            .field("matmul_strategy", &self.matmul_strategy)
            .finish_non_exhaustive()
    }
}

impl CudaClient {
    /// Create a new CUDA client for a device.
    ///
    /// This initializes the CUDA context and creates a stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cuda`] if context or stream creation fails (e.g.,
    /// invalid device ID or no driver).
    pub fn new(device: CudaDevice) -> Result<Self> {
        let context = CudaContext::new(device.index)?;
        context.bind_to_thread()?;
        let stream = context.new_stream()?;

        log::debug!("[ndkern::cuda] created client for device {}", device.index);

        Ok(Self {
            device,
            context,
            stream,
            matmul_strategy: MatmulStrategy::default(),
        })
    }

    /// Use `strategy` for subsequent matmul launches
    pub fn with_matmul_strategy(mut self, strategy: MatmulStrategy) -> Self {
        self.matmul_strategy = strategy;
        self
    }

    /// Kernel strategy used by matmul
    #[inline]
    pub fn matmul_strategy(&self) -> MatmulStrategy {
        self.matmul_strategy
    }

    /// Get reference to the CUDA stream.
    #[inline]
    pub fn stream(&self) -> &CudaStream {
        &self.stream
    }

    /// Get reference to the CUDA context.
    #[inline]
    pub fn context(&self) -> &Arc<CudaContext> {
        &self.context
    }
}

impl RuntimeClient<CudaRuntime> for CudaClient {
    fn device(&self) -> &CudaDevice {
        &self.device
    }

    fn synchronize(&self) -> Result<()> {
        self.stream.synchronize().map_err(|e| {
            Error::Launch(format!(
                "stream synchronization on device {} failed: {:?}",
                self.device.index, e
            ))
        })
    }
}
