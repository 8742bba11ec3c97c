//! Buffer operations
//!
//! This module defines operation traits and their per-backend implementations
//! for layout transforms, element-wise maps, matmul, and segmented reductions.
//!
//! # Design
//!
//! Operations are defined as traits that are implemented by each runtime's
//! client. Every operation writes into a caller-provided output buffer; the
//! engine never allocates results on its own.
//!
//! ```text
//! RuntimeClient<R>
//!   ├── LayoutOps   fill, compact, ewise_setitem, scalar_setitem
//!   ├── EwiseOps    ewise_{add,mul,div,maximum,eq,ge}
//!   ├── ScalarOps   scalar_{add,mul,div,maximum,eq,ge,power}
//!   ├── UnaryOps    ewise_{log,exp,tanh}
//!   ├── MatmulOps   matmul
//!   └── ReduceOps   reduce_{max,sum}
//! ```
//!
//! A backend implementation follows the same three steps for every op:
//!
//! 1. Validate lengths and layouts with the helpers in this module, before
//!    any device work is issued
//! 2. Launch the kernel over a [`LaunchGrid`](crate::runtime::LaunchGrid)
//! 3. Mark the output buffer as having pending work
//!
//! Operation kinds ([`EwiseOp`], [`ScalarOp`], [`UnaryOp`], [`ReduceOp`]) map
//! each variant to its device kernel and its scalar definition.

mod arithmetic;
pub(crate) mod layout;
pub(crate) mod matmul;
mod reduce;
pub mod traits;

pub mod cpu;

#[cfg(feature = "cuda")]
pub mod cuda;

pub use arithmetic::{EwiseOp, ScalarOp, UnaryOp, validate_same_len};
pub use layout::{validate_compact, validate_ewise_setitem, validate_scalar_setitem};
pub use matmul::validate_matmul_dims;
pub use reduce::{ReduceOp, validate_reduce};
pub use traits::{EwiseOps, LayoutOps, MatmulOps, ReduceOps, ScalarOps, UnaryOps};
