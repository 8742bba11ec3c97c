//! Algorithm contracts shared by every backend
//!
//! Backends must produce the same values for the same inputs. Where an
//! operation has more than one kernel strategy, the strategy is described
//! here once and implemented per backend.
//!
//! - [`MatmulStrategy`]: naive one-work-item-per-output GEMM, or 16x16 output
//!   tiles staged through fast memory

pub mod matmul;

pub use matmul::{MatmulStrategy, TILE, tile_count, tiled_work_items};
