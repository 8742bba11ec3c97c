//! CUDA runtime implementation

use super::cache::{
    get_or_create_client, is_cuda_context_valid, log_cuda_memory_error, try_get_cached_client,
    try_get_or_create_client,
};
use super::client::CudaClient;
use super::device::CudaDevice;
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use cudarc::driver::DriverError;
use cudarc::driver::sys::CUresult;

/// CUDA Runtime adapter
///
/// Implements the generic Runtime trait for CUDA backend.
/// Uses cudarc for direct GPU control.
#[derive(Clone, Debug, Default)]
pub struct CudaRuntime;

impl Runtime for CudaRuntime {
    type Device = CudaDevice;
    type Client = CudaClient;

    fn name() -> &'static str {
        "cuda"
    }

    /// Allocate GPU memory, ordered on the device stream.
    ///
    /// Returns `Err(OutOfMemory)` if CUDA memory allocation fails.
    fn allocate(size_bytes: usize, device: &Self::Device) -> Result<u64> {
        if size_bytes == 0 {
            return Ok(0);
        }

        let client = try_get_or_create_client(device)?;
        client.context.bind_to_thread()?;
        let stream = client.stream.cu_stream();

        unsafe {
            let mut ptr: u64 = 0;
            let result = cudarc::driver::sys::cuMemAllocAsync(&mut ptr, size_bytes, stream);
            if result == CUresult::CUDA_SUCCESS {
                return Ok(ptr);
            }

            // Pending frees on the stream may be holding the memory
            client
                .stream
                .synchronize()
                .map_err(|e| device_fault(device.index, e))?;
            let retry = cudarc::driver::sys::cuMemAllocAsync(&mut ptr, size_bytes, stream);
            if retry == CUresult::CUDA_SUCCESS {
                return Ok(ptr);
            }

            Err(Error::OutOfMemory {
                size: size_bytes,
                reason: format!("{:?} on device {}", retry, device.index),
            })
        }
    }

    fn deallocate(ptr: u64, _size_bytes: usize, device: &Self::Device) {
        if ptr == 0 {
            return;
        }

        unsafe {
            let result = match try_get_cached_client(device.index) {
                Some(client) => {
                    if let Err(e) = client.context.bind_to_thread() {
                        log::warn!(
                            "[ndkern::cuda] leaking 0x{:x}: cannot bind context: {:?}",
                            ptr,
                            e
                        );
                        return;
                    }
                    cudarc::driver::sys::cuMemFreeAsync(ptr, client.stream.cu_stream())
                }
                None if !is_cuda_context_valid() => return,
                None => cudarc::driver::sys::cuMemFree_v2(ptr),
            };

            if result != CUresult::CUDA_SUCCESS {
                log_cuda_memory_error("cuMemFree", ptr, result);
            }
        }
    }

    /// Copy data from host to device.
    ///
    /// Waits for the copy before returning, since `src` is only borrowed.
    fn copy_to_device(src: &[u8], dst: u64, device: &Self::Device) -> Result<()> {
        if src.is_empty() {
            return Ok(());
        }
        if dst == 0 {
            return Err(Error::Transfer(format!(
                "copy of {} bytes into a null buffer",
                src.len()
            )));
        }

        let client = try_get_or_create_client(device)?;
        client.context.bind_to_thread()?;

        unsafe {
            let result = cudarc::driver::sys::cuMemcpyHtoDAsync_v2(
                dst,
                src.as_ptr() as *const std::ffi::c_void,
                src.len(),
                client.stream.cu_stream(),
            );
            if result != CUresult::CUDA_SUCCESS {
                return Err(Error::Transfer(format!(
                    "host-to-device copy of {} bytes failed: {:?}",
                    src.len(),
                    result
                )));
            }
        }

        client
            .stream
            .synchronize()
            .map_err(|e| Error::Transfer(format!("host-to-device copy failed: {:?}", e)))
    }

    /// Copy data from device to host.
    ///
    /// The copy is ordered after all work on the device stream.
    fn copy_from_device(src: u64, dst: &mut [u8], device: &Self::Device) -> Result<()> {
        if dst.is_empty() {
            return Ok(());
        }
        if src == 0 {
            return Err(Error::Transfer(format!(
                "copy of {} bytes out of a null buffer",
                dst.len()
            )));
        }

        let client = try_get_or_create_client(device)?;
        client.context.bind_to_thread()?;

        unsafe {
            let result = cudarc::driver::sys::cuMemcpyDtoHAsync_v2(
                dst.as_mut_ptr() as *mut std::ffi::c_void,
                src,
                dst.len(),
                client.stream.cu_stream(),
            );
            if result != CUresult::CUDA_SUCCESS {
                return Err(Error::Transfer(format!(
                    "device-to-host copy of {} bytes failed: {:?}",
                    dst.len(),
                    result
                )));
            }
        }

        client
            .stream
            .synchronize()
            .map_err(|e| Error::Transfer(format!("device-to-host copy failed: {:?}", e)))
    }

    fn synchronize(device: &Self::Device) -> Result<()> {
        let client = try_get_or_create_client(device)?;
        client
            .stream
            .synchronize()
            .map_err(|e| device_fault(device.index, e))
    }

    fn default_device() -> Self::Device {
        CudaDevice::new(0)
    }

    fn default_client(device: &Self::Device) -> Self::Client {
        get_or_create_client(device)
    }
}

/// A failed stream sync surfaces the first deferred kernel fault
fn device_fault(device_index: usize, e: DriverError) -> Error {
    Error::Launch(format!("device {} reported a fault: {:?}", device_index, e))
}

/// Get the default CUDA device (device 0)
pub fn cuda_device() -> CudaDevice {
    CudaDevice::new(0)
}

/// Check if CUDA is available on this system
///
/// True if a client (context and stream) can be created for device 0.
pub fn is_cuda_available() -> bool {
    std::panic::catch_unwind(|| try_get_or_create_client(&CudaDevice::new(0)).is_ok())
        .unwrap_or(false)
}
