//! Launch sizing: 1-D partition of work-items into fixed-size groups
//!
//! This is the only launch-geometry policy in the engine. Element-wise maps,
//! layout kernels, reductions (one work-item per output segment) and both
//! matmul strategies all launch a flat 1-D grid. Tiling, where used, happens
//! inside the kernel body.

/// Work-items per group (256 threads is a good default for all targets)
pub const BLOCK_SIZE: u32 = 256;

/// 1-D launch geometry for `n` work-items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchGrid {
    /// Number of groups
    pub groups: u32,
    /// Work-items per group
    pub block_size: u32,
    /// Number of valid work-items; those at `gid >= work_items` do nothing
    pub work_items: usize,
}

impl LaunchGrid {
    /// Geometry covering `n` work-items: `ceil(n / BLOCK_SIZE)` groups
    #[inline]
    pub fn for_elements(n: usize) -> Self {
        let groups = n.div_ceil(BLOCK_SIZE as usize) as u32;
        Self {
            groups,
            block_size: BLOCK_SIZE,
            work_items: n,
        }
    }

    /// True if there is nothing to launch
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups == 0
    }

    /// Total launched work-items, including the idle tail of the last group
    #[inline]
    pub fn launched(&self) -> usize {
        self.groups as usize * self.block_size as usize
    }

    /// Grid dimensions as (x, y, z)
    #[inline]
    pub fn grid_dim(&self) -> (u32, u32, u32) {
        (self.groups, 1, 1)
    }

    /// Block dimensions as (x, y, z)
    #[inline]
    pub fn block_dim(&self) -> (u32, u32, u32) {
        (self.block_size, 1, 1)
    }
}
