//! CUDA kernel launchers
//!
//! The `.cu` sources next to this file are compiled to PTX by `build.rs`.
//! Launchers here load the PTX modules on first use and enqueue kernels on
//! the client stream; none of them synchronize.

mod elementwise;
mod layout;
mod loader;
mod matmul;
mod reduce;

pub use elementwise::{launch_ewise, launch_scalar, launch_unary};
pub use layout::{launch_compact, launch_ewise_setitem, launch_fill, launch_scalar_setitem};
pub use matmul::launch_matmul;
pub use reduce::launch_reduce;
