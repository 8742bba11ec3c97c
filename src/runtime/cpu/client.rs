//! CPU client implementation

use super::device::CpuDevice;
use super::runtime::CpuRuntime;
use crate::algorithm::MatmulStrategy;
use crate::error::Result;
use crate::runtime::RuntimeClient;

/// CPU client for operation dispatch
#[derive(Clone, Debug)]
pub struct CpuClient {
    pub(crate) device: CpuDevice,
    matmul_strategy: MatmulStrategy,
}

impl CpuClient {
    /// Create a new CPU client
    pub fn new(device: CpuDevice) -> Self {
        Self {
            device,
            matmul_strategy: MatmulStrategy::default(),
        }
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
}

impl RuntimeClient<CpuRuntime> for CpuClient {
    fn device(&self) -> &CpuDevice {
        &self.device
    }

    fn synchronize(&self) -> Result<()> {
        // CPU launches are synchronous, nothing to wait for
        Ok(())
    }
}
