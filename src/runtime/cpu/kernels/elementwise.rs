//! Element-wise map kernels

use super::launch_map;
use crate::ops::{EwiseOp, ScalarOp, UnaryOp};

/// `out[i] = op(a[i], b[i])`
///
/// All three slices must have equal length.
pub fn ewise_kernel(op: EwiseOp, a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert!(a.len() == out.len() && b.len() == out.len());
    launch_map(out, |gid| op.apply(a[gid], b[gid]));
}

/// `out[i] = op(a[i], value)`
pub fn scalar_kernel(op: ScalarOp, a: &[f32], value: f32, out: &mut [f32]) {
    debug_assert_eq!(a.len(), out.len());
    launch_map(out, |gid| op.apply(a[gid], value));
}

/// `out[i] = op(a[i])`
pub fn unary_kernel(op: UnaryOp, a: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), out.len());
    launch_map(out, |gid| op.apply(a[gid]));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ewise_large_parallel_path() {
        let n = 10_000;
        let a: Vec<f32> = (0..n).map(|i| i as f32).collect();
        let b = vec![2.0f32; n];
        let mut out = vec![0.0f32; n];
        ewise_kernel(EwiseOp::Mul, &a, &b, &mut out);
        assert!(out.iter().enumerate().all(|(i, &v)| v == 2.0 * i as f32));
    }

    #[test]
    fn test_scalar_ge_mask() {
        let a = [1.0, 2.0, 3.0];
        let mut out = [0.0; 3];
        scalar_kernel(ScalarOp::Ge, &a, 2.0, &mut out);
        assert_eq!(out, [0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_unary_exp() {
        let a = [0.0, 1.0];
        let mut out = [0.0; 2];
        unary_kernel(UnaryOp::Exp, &a, &mut out);
        assert_eq!(out[0], 1.0);
        assert!((out[1] - std::f32::consts::E).abs() < 1e-6);
    }
}
