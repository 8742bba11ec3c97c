//! Error types for ndkern

use thiserror::Error;

/// Result type alias using ndkern's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ndkern operations
#[derive(Error, Debug)]
pub enum Error {
    /// Device allocation failed
    #[error("Out of memory: failed to allocate {size} bytes ({reason})")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
        /// Device-reported reason
        reason: String,
    },

    /// Shape or stride vector exceeds the kernel parameter capacity
    #[error("Dimension limit exceeded: {ndim} dimensions, at most {max} supported")]
    DimensionLimit {
        /// Number of dimensions requested
        ndim: usize,
        /// Maximum supported number of dimensions
        max: usize,
    },

    /// Operand sizes or ranks do not agree
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected extent
        expected: Vec<usize>,
        /// Actual extent
        got: Vec<usize>,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A strided view addresses memory outside its buffer
    #[error("Index {index} out of bounds for buffer of {size} elements")]
    IndexOutOfBounds {
        /// The offending element address
        index: usize,
        /// Number of elements in the buffer
        size: usize,
    },

    /// Host/device copy failed
    #[error("Transfer failed: {0}")]
    Transfer(String),

    /// Kernel launch failed or the device reported an execution fault
    #[error("Kernel execution failed: {0}")]
    Launch(String),

    /// CUDA-specific error
    #[cfg(feature = "cuda")]
    #[error("CUDA error: {0}")]
    Cuda(#[from] cudarc::driver::DriverError),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
