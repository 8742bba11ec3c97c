//! Shared helpers for backend parity tests: assertion utilities, backend lock, client creation.

use crate::common::create_cuda_client;
use ndkern::runtime::cuda::{CudaClient, CudaDevice};
use std::sync::{Mutex, OnceLock};

static CUDA_BACKEND_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub fn assert_parity_f32(a: &[f32], b: &[f32], op: &str) {
    let rtol = 1e-5f32;
    let atol = 1e-5f32;
    assert_eq!(
        a.len(),
        b.len(),
        "parity_f32[{}]: length mismatch: {} vs {}",
        op,
        a.len(),
        b.len()
    );

    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        if x.is_nan() && y.is_nan() {
            continue;
        }
        if x.is_infinite() || y.is_infinite() {
            assert_eq!(x, y, "parity_f32[{}] at index {}", op, i);
            continue;
        }
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        if diff > tol {
            panic!(
                "parity_f32[{}] at index {}: {} vs {} (diff={}, tol={})",
                op, i, x, y, diff, tol
            );
        }
    }
}

/// Run `f` against the CUDA backend, or skip when no device is present
///
/// Launches share one stream per device, so parity tests run one at a time.
pub fn with_cuda_backend<F>(mut f: F)
where
    F: FnMut(CudaClient, CudaDevice),
{
    let _guard = CUDA_BACKEND_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    match create_cuda_client() {
        Some((client, device)) => f(client, device),
        None => eprintln!("CUDA unavailable, skipping"),
    }
}
