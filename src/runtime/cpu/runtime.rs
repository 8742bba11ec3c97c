//! CPU runtime implementation

use super::client::CpuClient;
use super::device::CpuDevice;
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use std::alloc::{Layout as AllocLayout, alloc_zeroed, dealloc};

/// Buffer alignment in bytes (AVX-512 width)
const ALIGN: usize = 64;

/// CPU compute runtime
///
/// This is the default runtime that works on any platform.
/// Memory is allocated on the heap using the system allocator.
#[derive(Clone, Debug, Default)]
pub struct CpuRuntime;

impl Runtime for CpuRuntime {
    type Device = CpuDevice;
    type Client = CpuClient;

    fn name() -> &'static str {
        "cpu"
    }

    fn allocate(size_bytes: usize, _device: &Self::Device) -> Result<u64> {
        if size_bytes == 0 {
            return Ok(0);
        }

        let layout =
            AllocLayout::from_size_align(size_bytes, ALIGN).map_err(|e| Error::OutOfMemory {
                size: size_bytes,
                reason: e.to_string(),
            })?;

        let ptr = unsafe { alloc_zeroed(layout) };
        if ptr.is_null() {
            return Err(Error::OutOfMemory {
                size: size_bytes,
                reason: "system allocator returned null".to_string(),
            });
        }

        Ok(ptr as u64)
    }

    fn deallocate(ptr: u64, size_bytes: usize, _device: &Self::Device) {
        if ptr == 0 || size_bytes == 0 {
            return;
        }

        let Ok(layout) = AllocLayout::from_size_align(size_bytes, ALIGN) else {
            log::warn!(
                "[ndkern::cpu] refusing to free 0x{:x}: invalid layout for {} bytes",
                ptr,
                size_bytes
            );
            return;
        };

        unsafe {
            dealloc(ptr as *mut u8, layout);
        }
    }

    fn copy_to_device(src: &[u8], dst: u64, _device: &Self::Device) -> Result<()> {
        if src.is_empty() {
            return Ok(());
        }
        if dst == 0 {
            return Err(Error::Transfer(format!(
                "copy of {} bytes into a null buffer",
                src.len()
            )));
        }

        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), dst as *mut u8, src.len());
        }
        Ok(())
    }

    fn copy_from_device(src: u64, dst: &mut [u8], _device: &Self::Device) -> Result<()> {
        if dst.is_empty() {
            return Ok(());
        }
        if src == 0 {
            return Err(Error::Transfer(format!(
                "copy of {} bytes out of a null buffer",
                dst.len()
            )));
        }

        unsafe {
            std::ptr::copy_nonoverlapping(src as *const u8, dst.as_mut_ptr(), dst.len());
        }
        Ok(())
    }

    fn synchronize(_device: &Self::Device) -> Result<()> {
        Ok(())
    }

    fn default_device() -> Self::Device {
        CpuDevice::new()
    }

    fn default_client(device: &Self::Device) -> Self::Client {
        CpuClient::new(device.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_is_aligned_and_zeroed() {
        let device = CpuDevice::new();
        let ptr = CpuRuntime::allocate(256, &device).unwrap();
        assert_eq!(ptr % ALIGN as u64, 0);

        let mut host = [1u8; 256];
        CpuRuntime::copy_from_device(ptr, &mut host, &device).unwrap();
        assert!(host.iter().all(|&b| b == 0));
        CpuRuntime::deallocate(ptr, 256, &device);
    }

    #[test]
    fn test_zero_bytes_is_null() {
        let device = CpuDevice::new();
        assert_eq!(CpuRuntime::allocate(0, &device).unwrap(), 0);
        CpuRuntime::deallocate(0, 0, &device);
    }

    #[test]
    fn test_copy_into_null_fails() {
        let device = CpuDevice::new();
        let err = CpuRuntime::copy_to_device(&[0u8; 4], 0, &device).unwrap_err();
        assert!(matches!(err, Error::Transfer(_)));
    }

    #[test]
    fn test_impossible_layout_is_out_of_memory() {
        let device = CpuDevice::new();
        let err = CpuRuntime::allocate(usize::MAX - 8, &device).unwrap_err();
        assert!(matches!(err, Error::OutOfMemory { .. }));
    }
}
