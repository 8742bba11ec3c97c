//! Global client cache for CUDA runtime

use super::client::CudaClient;
use super::device::CudaDevice;
use crate::error::Result;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Global client cache: device index -> cached CudaClient
///
/// Caching keeps one context and one stream per device, so every operation
/// on a device is ordered on the same stream.
static CLIENT_CACHE: OnceLock<Mutex<HashMap<usize, CudaClient>>> = OnceLock::new();

/// Check if the CUDA context on the current thread is valid.
///
/// # Safety
///
/// This function calls CUDA driver API directly. It is safe to call at any time
/// but the result is only valid for the current thread's context state.
#[inline]
pub(super) unsafe fn is_cuda_context_valid() -> bool {
    let mut ctx: cudarc::driver::sys::CUcontext = std::ptr::null_mut();
    // SAFETY: cuCtxGetCurrent is safe to call at any time and writes to the provided pointer.
    let result = unsafe { cudarc::driver::sys::cuCtxGetCurrent(&mut ctx) };
    result == cudarc::driver::sys::CUresult::CUDA_SUCCESS && !ctx.is_null()
}

/// Safely lock the client cache, recovering from poisoned mutex.
///
/// If the mutex is poisoned (a thread panicked while holding the lock),
/// we recover the guard since our cache operations are idempotent.
#[inline]
fn lock_client_cache(
    cache: &Mutex<HashMap<usize, CudaClient>>,
) -> MutexGuard<'_, HashMap<usize, CudaClient>> {
    cache.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Get or create the cached CudaClient for a device.
///
/// # Errors
///
/// Returns the driver error if the context or stream cannot be created.
pub(super) fn try_get_or_create_client(device: &CudaDevice) -> Result<CudaClient> {
    let cache = CLIENT_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut cache_guard = lock_client_cache(cache);

    if let Some(client) = cache_guard.get(&device.index) {
        return Ok(client.clone());
    }

    let client = CudaClient::new(device.clone())?;
    cache_guard.insert(device.index, client.clone());

    Ok(client)
}

/// Get or create the cached CudaClient for a device.
///
/// # Panics
///
/// Panics if no client can be created for the device; use
/// [`is_cuda_available`](super::is_cuda_available) to probe first.
pub(super) fn get_or_create_client(device: &CudaDevice) -> CudaClient {
    match try_get_or_create_client(device) {
        Ok(client) => client,
        Err(e) => panic!(
            "[ndkern::cuda] failed to create client for device {}: {}",
            device.index, e
        ),
    }
}

/// Get the cached client for a device without creating one.
///
/// Returns `None` if no client is cached.
#[inline]
pub(super) fn try_get_cached_client(device_index: usize) -> Option<CudaClient> {
    let cache = CLIENT_CACHE.get()?;
    lock_client_cache(cache).get(&device_index).cloned()
}

/// Log a CUDA memory operation failure.
#[cold]
#[inline(never)]
pub(super) fn log_cuda_memory_error(
    operation: &str,
    ptr: u64,
    result: cudarc::driver::sys::CUresult,
) {
    log::warn!(
        "[ndkern::cuda] {} failed for ptr 0x{:x}: {:?}",
        operation,
        ptr,
        result
    );
}
