//! # ndkern
//!
//! **Device-resident f32 array kernels with a CPU reference backend and a CUDA backend.**
//!
//! ndkern is the compute engine underneath an n-dimensional array library. It
//! owns flat device buffers and runs the kernels such a library needs; shapes,
//! strides and offsets stay with the caller and are passed in fresh on every
//! call.
//!
//! ## Features
//!
//! - **Buffers**: exclusively owned device allocations released on drop
//! - **Layout kernels**: fill, compact (strided gather), strided assignment
//! - **Element-wise**: add, mul, div, maximum, eq, ge, scalar variants, power,
//!   log, exp, tanh
//! - **Matmul**: naive and 16x16-tiled kernels with identical results
//! - **Reductions**: max and sum over contiguous segments
//! - **Host bridge**: copy buffers to and from host memory, with strided views
//!
//! ## Quick Start
//!
//! ```
//! use ndkern::prelude::*;
//! # use ndkern::runtime::cpu::{CpuDevice, CpuRuntime};
//!
//! let device = CpuDevice::new();
//! let client = CpuRuntime::default_client(&device);
//!
//! let a = DeviceBuffer::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0, 4.0], &device)?;
//! let mut doubled = DeviceBuffer::<CpuRuntime>::new(4, &device)?;
//! client.scalar_mul(&a, 2.0, &mut doubled)?;
//!
//! let mut sums = DeviceBuffer::<CpuRuntime>::new(2, &device)?;
//! client.reduce_sum(&a, &mut sums, 2)?;
//!
//! assert_eq!(doubled.to_vec()?, vec![2.0, 4.0, 6.0, 8.0]);
//! assert_eq!(sums.to_vec()?, vec![3.0, 7.0]);
//! # Ok::<(), ndkern::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cpu` (default): CPU backend in the prelude
//! - `rayon` (default): Multi-threaded CPU kernels
//! - `cuda`: NVIDIA CUDA backend (kernels compiled to PTX at build time)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod buffer;
pub mod error;
pub mod ops;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::{MatmulStrategy, TILE};
    pub use crate::buffer::{DeviceBuffer, HostArray, MAX_DIMS, ShapeVector, StridedLayout};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{
        EwiseOp, EwiseOps, LayoutOps, MatmulOps, ReduceOp, ReduceOps, ScalarOp, ScalarOps,
        UnaryOp, UnaryOps,
    };
    pub use crate::runtime::{BLOCK_SIZE, Device, Runtime, RuntimeClient};

    #[cfg(feature = "cpu")]
    pub use crate::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};

    #[cfg(feature = "cuda")]
    pub use crate::runtime::cuda::{CudaClient, CudaDevice, CudaRuntime, is_cuda_available};
}

/// Default runtime based on enabled features
///
/// - With `cuda` feature: `CudaRuntime`
/// - Otherwise: `CpuRuntime`
#[cfg(feature = "cuda")]
pub type DefaultRuntime = runtime::cuda::CudaRuntime;

/// Default runtime based on enabled features
#[cfg(not(feature = "cuda"))]
pub type DefaultRuntime = runtime::cpu::CpuRuntime;
