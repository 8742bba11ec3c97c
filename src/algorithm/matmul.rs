//! Matrix multiplication strategies
//!
//! Both strategies compute `out[i, j] = Σ_k a[i, k] * b[k, j]` for compact
//! row-major `a` (M×N), `b` (N×P) and `out` (M×P), accumulating `k` in
//! ascending order. They differ only in how work is partitioned:
//!
//! ```text
//! Naive:  work-item gid -> (i = gid / P, j = gid % P), serial loop over k
//!
//! Tiled:  group g -> output tile (ti, tj) of TILE×TILE elements
//!   For k0 = 0..N step TILE:
//!     1. Each work-item loads one element of the A tile and one of the B tile
//!        into fast memory (zero outside the matrix)
//!     2. Barrier
//!     3. Each work-item accumulates TILE products into a register
//!     4. Barrier
//!   Work-items inside the matrix write their accumulator
//! ```
//!
//! Tiles on the right and bottom edges are partial; the same kernel handles
//! them by masking loads and stores, so dimensions need not be multiples of
//! [`TILE`]. Launch geometry stays 1-D: `tiles * TILE * TILE` work-items in
//! groups of [`BLOCK_SIZE`](crate::runtime::BLOCK_SIZE), one group per tile.

/// Edge length of a square output tile
pub const TILE: usize = 16;

/// Kernel selection for matrix multiplication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatmulStrategy {
    /// One work-item per output element, no staging
    Naive,
    /// One group per TILE×TILE output tile, operands staged in fast memory
    #[default]
    Tiled,
}

impl MatmulStrategy {
    /// Entry point of the device kernel for this strategy
    pub fn kernel_name(self) -> &'static str {
        match self {
            MatmulStrategy::Naive => "matmul_naive",
            MatmulStrategy::Tiled => "matmul_tiled",
        }
    }
}

/// Number of output tiles covering an `m × p` result, as (rows, cols)
#[inline]
pub fn tile_count(m: usize, p: usize) -> (usize, usize) {
    (m.div_ceil(TILE), p.div_ceil(TILE))
}

/// Work-items a tiled launch needs for an `m × p` result: one full group per tile
#[inline]
pub fn tiled_work_items(m: usize, p: usize) -> usize {
    let (rows, cols) = tile_count(m, p);
    rows * cols * TILE * TILE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::BLOCK_SIZE;

    #[test]
    fn test_one_tile_per_group() {
        assert_eq!(TILE * TILE, BLOCK_SIZE as usize);
    }

    #[test]
    fn test_tile_count_partial_edges() {
        assert_eq!(tile_count(7, 7), (1, 1));
        assert_eq!(tile_count(16, 17), (1, 2));
        assert_eq!(tile_count(33, 1), (3, 1));
        assert_eq!(tile_count(0, 5), (0, 1));
    }

    #[test]
    fn test_tiled_work_items_one_group_per_tile() {
        let block = BLOCK_SIZE as usize;
        assert_eq!(tiled_work_items(7, 7), block);
        assert_eq!(tiled_work_items(16, 17), 2 * block);
        assert_eq!(tiled_work_items(33, 20), 6 * block);
        assert_eq!(tiled_work_items(0, 5), 0);
        assert_eq!(tiled_work_items(33, 20) % block, 0);
    }

    #[test]
    fn test_default_is_tiled() {
        assert_eq!(MatmulStrategy::default(), MatmulStrategy::Tiled);
        assert_eq!(MatmulStrategy::Naive.kernel_name(), "matmul_naive");
    }
}
