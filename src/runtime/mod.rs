//! Runtime backends for buffer computation
//!
//! This module defines the `Runtime` trait and provides implementations
//! for the supported compute backends (CPU, CUDA).
//!
//! # Architecture
//!
//! ```text
//! Runtime (backend identity, memory, transfers)
//! ├── Device (identifies a specific GPU/CPU)
//! └── Client (dispatches kernels, owns the stream)
//! ```
//!
//! Every kernel uses the same 1-D launch geometry from [`launch`]: groups of
//! [`BLOCK_SIZE`] work-items, `ceil(n / BLOCK_SIZE)` groups.

pub mod launch;
mod traits;

pub mod cpu;

#[cfg(feature = "cuda")]
pub mod cuda;

pub use launch::{BLOCK_SIZE, LaunchGrid};
pub use traits::{Device, Runtime, RuntimeClient};
