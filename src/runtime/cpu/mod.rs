//! CPU runtime implementation
//!
//! The CPU runtime stores buffers in 64-byte aligned heap memory and runs the
//! reference implementation of every kernel. Launches use the same 1-D
//! geometry as the device backends; groups execute in parallel when the
//! `rayon` feature is enabled and serially otherwise.
//!
//! Every launch has completed by the time it returns, so synchronization is
//! a no-op and no CPU operation ever reports a deferred fault.

mod client;
mod device;
pub(crate) mod helpers;
pub(crate) mod kernels;
mod runtime;

pub use client::CpuClient;
pub use device::CpuDevice;
pub use runtime::CpuRuntime;
