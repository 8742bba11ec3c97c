//! Matrix multiplication kernels
//!
//! Both kernels accumulate `k` in ascending order from zero, so they produce
//! bit-identical results.

use super::launch_map;
use crate::algorithm::TILE;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// One work-item per output element: `gid -> (gid / p, gid % p)`
///
/// `a` is `m × n`, `b` is `n × p`, `out` is `m × p`, all compact row-major.
pub fn matmul_naive_kernel(a: &[f32], b: &[f32], out: &mut [f32], n: usize, p: usize) {
    launch_map(out, |gid| {
        let i = gid / p;
        let j = gid % p;
        let mut acc = 0.0f32;
        for k in 0..n {
            acc += a[i * n + k] * b[k * p + j];
        }
        acc
    });
}

/// TILE×TILE output tiles with operand blocks staged in local arrays
///
/// Bands of TILE rows run in parallel; each band walks its tiles left to
/// right. Edge tiles are clipped to the matrix.
pub fn matmul_tiled_kernel(a: &[f32], b: &[f32], out: &mut [f32], n: usize, p: usize) {
    if out.is_empty() {
        return;
    }
    let band_len = TILE * p;

    #[cfg(feature = "rayon")]
    {
        out.par_chunks_mut(band_len)
            .enumerate()
            .for_each(|(band, rows)| tiled_band(a, b, rows, band * TILE, n, p));
    }

    #[cfg(not(feature = "rayon"))]
    for (band, rows) in out.chunks_mut(band_len).enumerate() {
        tiled_band(a, b, rows, band * TILE, n, p);
    }
}

/// Compute rows `row0..row0 + rows.len() / p` of the product
fn tiled_band(a: &[f32], b: &[f32], rows: &mut [f32], row0: usize, n: usize, p: usize) {
    let tile_rows = rows.len() / p;
    let mut a_tile = [[0.0f32; TILE]; TILE];
    let mut b_tile = [[0.0f32; TILE]; TILE];
    let mut acc = [[0.0f32; TILE]; TILE];

    for col0 in (0..p).step_by(TILE) {
        let tile_cols = TILE.min(p - col0);
        for row in acc.iter_mut() {
            row.fill(0.0);
        }

        for k0 in (0..n).step_by(TILE) {
            let depth = TILE.min(n - k0);
            for r in 0..tile_rows {
                let src = (row0 + r) * n + k0;
                a_tile[r][..depth].copy_from_slice(&a[src..src + depth]);
            }
            for kk in 0..depth {
                let src = (k0 + kk) * p + col0;
                b_tile[kk][..tile_cols].copy_from_slice(&b[src..src + tile_cols]);
            }

            for r in 0..tile_rows {
                for c in 0..tile_cols {
                    let mut sum = acc[r][c];
                    for kk in 0..depth {
                        sum += a_tile[r][kk] * b_tile[kk][c];
                    }
                    acc[r][c] = sum;
                }
            }
        }

        for r in 0..tile_rows {
            rows[r * p + col0..r * p + col0 + tile_cols].copy_from_slice(&acc[r][..tile_cols]);
        }
    }
}
