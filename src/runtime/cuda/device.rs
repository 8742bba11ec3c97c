//! CUDA Device implementation

use crate::runtime::Device;

/// CUDA Device
///
/// Identifies one GPU by ordinal. The context and stream for it live in the
/// cached [`CudaClient`](super::CudaClient).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CudaDevice {
    /// Index of the GPU device (0, 1, 2, ...)
    pub(crate) index: usize,
}

impl CudaDevice {
    /// Create a new CUDA device
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Get the device ordinal
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Device for CudaDevice {
    fn id(&self) -> usize {
        self.index
    }

    fn name(&self) -> String {
        format!("cuda:{}", self.index)
    }
}

impl Default for CudaDevice {
    fn default() -> Self {
        Self::new(0)
    }
}
