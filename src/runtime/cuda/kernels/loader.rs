//! PTX loading, module caching, and launch configuration
//!
//! Modules are loaded on first use and cached per device. The cache is
//! guarded by a `Mutex` so launchers can be called from any thread.

use cudarc::driver::safe::{CudaContext, CudaFunction, CudaModule, LaunchConfig};
use cudarc::nvrtc::Ptx;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::error::{Error, Result};
use crate::runtime::LaunchGrid;

/// Directory containing compiled PTX files (set by build.rs)
const KERNEL_DIR: &str = env!("CUDA_KERNEL_DIR");

/// PTX module names, one per `.cu` source
pub mod modules {
    /// fill, compact, ewise_setitem, scalar_setitem
    pub const LAYOUT: &str = "layout";
    /// ewise_*, scalar_*
    pub const ELEMENTWISE: &str = "elementwise";
    /// matmul_naive, matmul_tiled
    pub const MATMUL: &str = "matmul";
    /// reduce_max, reduce_sum
    pub const REDUCE: &str = "reduce";
}

fn load_ptx(name: &str) -> Ptx {
    Ptx::from_file(format!("{}/{}.ptx", KERNEL_DIR, name))
}

/// Loaded modules keyed by (device_index, module_name)
static MODULE_CACHE: OnceLock<Mutex<HashMap<(usize, &'static str), Arc<CudaModule>>>> =
    OnceLock::new();

/// Get or load a CUDA module from PTX
///
/// # Errors
///
/// Returns [`Error::Internal`] if the cache lock is poisoned or the PTX file
/// cannot be loaded into the context.
pub fn get_or_load_module(
    context: &Arc<CudaContext>,
    device_index: usize,
    module_name: &'static str,
) -> Result<Arc<CudaModule>> {
    let cache = MODULE_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = cache
        .lock()
        .map_err(|e| Error::Internal(format!("module cache lock poisoned: {}", e)))?;

    let key = (device_index, module_name);
    if let Some(module) = guard.get(&key) {
        return Ok(module.clone());
    }

    let module = context.load_module(load_ptx(module_name)).map_err(|e| {
        Error::Internal(format!(
            "failed to load CUDA module '{}' from {}: {:?}",
            module_name, KERNEL_DIR, e
        ))
    })?;
    log::debug!(
        "[ndkern::cuda] loaded module '{}' on device {}",
        module_name,
        device_index
    );

    guard.insert(key, module.clone());
    Ok(module)
}

/// Get a kernel entry point from a loaded module
pub fn get_kernel_function(module: &Arc<CudaModule>, kernel_name: &str) -> Result<CudaFunction> {
    module
        .load_function(kernel_name)
        .map_err(|e| Error::Internal(format!("kernel '{}' not found: {:?}", kernel_name, e)))
}

/// Convert engine launch geometry into a driver launch configuration
#[inline]
pub fn launch_config(grid: LaunchGrid) -> LaunchConfig {
    LaunchConfig {
        grid_dim: grid.grid_dim(),
        block_dim: grid.block_dim(),
        shared_mem_bytes: 0,
    }
}

/// Map a driver launch failure to [`Error::Launch`]
pub fn launch_error(kernel_name: &str, e: impl std::fmt::Debug) -> Error {
    Error::Launch(format!("failed to launch '{}': {:?}", kernel_name, e))
}
