//! Operation traits for buffer operations.
//!
//! This module contains trait definitions for each operation family.
//! Implementations are in the backend-specific modules (cpu/, cuda/).

mod elementwise;
mod layout;
mod matmul;
mod reduce;

pub use elementwise::{EwiseOps, ScalarOps, UnaryOps};
pub use layout::LayoutOps;
pub use matmul::MatmulOps;
pub use reduce::ReduceOps;
