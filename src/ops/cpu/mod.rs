//! CPU implementation of buffer operations.
//!
//! This module contains the operation trait implementations for the CPU runtime.
//! Each operation family has its own module.

pub mod elementwise;
pub mod layout;
pub mod matmul;
pub mod reduce;
