//! CUDA runtime implementation
//!
//! This module provides GPU acceleration via NVIDIA CUDA using cudarc.
//!
//! # Features
//!
//! - `CudaDevice` - Represents a CUDA GPU device
//! - `CudaClient` - Owns the context and the single stream all kernels launch on
//! - `CudaRuntime` - Implements the generic Runtime trait
//!
//! Kernels are native CUDA C compiled to PTX by `build.rs`; no vendor
//! libraries (cuBLAS) are involved.
//!
//! # Asynchrony
//!
//! Launches return once enqueued. Memory copies, [`Runtime::synchronize`] and
//! buffer release wait on the stream; a kernel fault surfaces at the first of
//! those as [`Error::Launch`](crate::error::Error::Launch).
//!
//! [`Runtime::synchronize`]: crate::runtime::Runtime::synchronize

mod cache;
mod client;
mod device;
pub(crate) mod kernels;
mod runtime;

pub use client::CudaClient;
pub use device::CudaDevice;
pub use runtime::{CudaRuntime, cuda_device, is_cuda_available};
