//! DeviceBuffer: exclusively owned device allocation with RAII release

use crate::error::{Error, Result};
use crate::runtime::{Device, Runtime};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Size of one element in bytes (all engine data is f32)
pub const ELEMENT_SIZE: usize = std::mem::size_of::<f32>();

/// A flat f32 allocation on a device
///
/// A buffer has exactly one owner. Views over it are described by a
/// [`StridedLayout`](super::StridedLayout) kept outside the buffer, never by a
/// second owner. Memory is released exactly once, when the buffer is dropped
/// or explicitly [released](DeviceBuffer::release).
///
/// # Pending work
///
/// Kernel launches are asynchronous on GPU backends. Every operation that
/// writes a buffer marks it as having pending work; reading it back through
/// the Host Bridge or releasing it first waits for the device stream. This is
/// the only synchronization point the engine exposes.
pub struct DeviceBuffer<R: Runtime> {
    /// Raw device address (GPU address or CPU pointer cast to u64)
    ptr: u64,
    /// Number of f32 elements
    len: usize,
    /// Device where memory is allocated
    device: R::Device,
    /// Set when a launch writing this buffer may still be in flight
    pending: AtomicBool,
}

impl<R: Runtime> DeviceBuffer<R> {
    /// Allocate a buffer of `len` elements on `device`
    ///
    /// Contents are unspecified until written by a kernel or a host copy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] with the device-reported reason if the
    /// allocation fails; no buffer is constructed in that case.
    pub fn new(len: usize, device: &R::Device) -> Result<Self> {
        let size_bytes = len.checked_mul(ELEMENT_SIZE).ok_or_else(|| Error::OutOfMemory {
            size: usize::MAX,
            reason: format!("{} elements overflow the address space", len),
        })?;
        let ptr = R::allocate(size_bytes, device)?;

        Ok(Self {
            ptr,
            len,
            device: device.clone(),
            pending: AtomicBool::new(false),
        })
    }

    /// Allocate a buffer and fill it from host data
    pub fn from_slice(data: &[f32], device: &R::Device) -> Result<Self> {
        let mut buffer = Self::new(data.len(), device)?;
        buffer.copy_from_host(data)?;
        Ok(buffer)
    }

    /// Raw device address, for debugging and engine-internal launches only
    #[inline]
    pub fn ptr(&self) -> u64 {
        self.ptr
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the buffer holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.len * ELEMENT_SIZE
    }

    /// Device where this buffer lives
    #[inline]
    pub fn device(&self) -> &R::Device {
        &self.device
    }

    /// True if a write to this buffer may still be executing
    #[inline]
    pub fn has_pending_work(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Record that a launch writing this buffer has been enqueued
    #[inline]
    pub(crate) fn mark_pending(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Wait until every enqueued write to this buffer has completed
    ///
    /// Asynchronous kernel faults surface here as [`Error::Launch`].
    pub fn wait(&self) -> Result<()> {
        if self.pending.swap(false, Ordering::AcqRel) {
            R::synchronize(&self.device)?;
        }
        Ok(())
    }

    /// Copy a contiguous host slice into this buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transfer`] if `data` does not hold exactly `len()`
    /// elements or the device reports a copy failure.
    pub fn copy_from_host(&mut self, data: &[f32]) -> Result<()> {
        if data.len() != self.len {
            return Err(Error::Transfer(format!(
                "host data has {} elements, device buffer holds {}",
                data.len(),
                self.len
            )));
        }
        R::copy_to_device(bytemuck::cast_slice(data), self.ptr, &self.device)
    }

    /// Copy the whole buffer back to the host in storage order
    pub fn to_vec(&self) -> Result<Vec<f32>> {
        self.wait()?;
        let mut result = vec![0.0f32; self.len];
        R::copy_from_device(self.ptr, bytemuck::cast_slice_mut(&mut result), &self.device)?;
        Ok(result)
    }

    /// Release the allocation, reporting any deferred device fault
    ///
    /// Dropping the buffer performs the same wait but can only log failures.
    pub fn release(self) -> Result<()> {
        self.wait()
    }
}

impl<R: Runtime> Drop for DeviceBuffer<R> {
    fn drop(&mut self) {
        if self.pending.swap(false, Ordering::AcqRel) {
            if let Err(e) = R::synchronize(&self.device) {
                log::warn!(
                    "[ndkern::{}] pending work on buffer 0x{:x} failed before release: {}",
                    R::name(),
                    self.ptr,
                    e
                );
            }
        }
        if self.ptr != 0 {
            R::deallocate(self.ptr, self.size_in_bytes(), &self.device);
        }
    }
}

impl<R: Runtime> fmt::Debug for DeviceBuffer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceBuffer")
            .field("ptr", &format_args!("0x{:x}", self.ptr))
            .field("len", &self.len)
            .field("device", &self.device.name())
            .field("pending", &self.has_pending_work())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::{CpuDevice, CpuRuntime};

    #[test]
    fn test_allocate_and_roundtrip() {
        let device = CpuDevice::new();
        let buf = DeviceBuffer::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0], &device).unwrap();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.size_in_bytes(), 12);
        assert_ne!(buf.ptr(), 0);
        assert_eq!(buf.to_vec().unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_zero_length_buffer() {
        let device = CpuDevice::new();
        let buf = DeviceBuffer::<CpuRuntime>::new(0, &device).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.ptr(), 0);
        assert!(buf.to_vec().unwrap().is_empty());
        buf.release().unwrap();
    }

    #[test]
    fn test_copy_from_host_length_mismatch() {
        let device = CpuDevice::new();
        let mut buf = DeviceBuffer::<CpuRuntime>::new(4, &device).unwrap();
        let err = buf.copy_from_host(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::Transfer(_)));
    }

    #[test]
    fn test_pending_flag_cleared_by_wait() {
        let device = CpuDevice::new();
        let buf = DeviceBuffer::<CpuRuntime>::new(8, &device).unwrap();
        assert!(!buf.has_pending_work());
        buf.mark_pending();
        assert!(buf.has_pending_work());
        buf.wait().unwrap();
        assert!(!buf.has_pending_work());
    }

    #[test]
    fn test_oversized_allocation_fails() {
        let device = CpuDevice::new();
        let err = DeviceBuffer::<CpuRuntime>::new(usize::MAX / 2, &device).unwrap_err();
        assert!(matches!(err, Error::OutOfMemory { .. }));
    }
}
