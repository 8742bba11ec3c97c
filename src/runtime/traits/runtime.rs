//! Core trait for compute backends

/// Core trait for compute backends
///
/// `Runtime` abstracts over device families (host CPU, CUDA GPUs). It uses
/// static dispatch via generics; a [`DeviceBuffer`](crate::buffer::DeviceBuffer)
/// is parameterized by the runtime that owns its memory.
///
/// # Associated Types
///
/// - `Device`: Identifies a specific compute unit (e.g., GPU 0, GPU 1)
/// - `Client`: Dispatches kernels and owns the execution stream
///
/// # Example
///
/// ```
/// # use ndkern::prelude::*;
/// # use ndkern::runtime::cpu::CpuRuntime;
/// let device = CpuRuntime::default_device();
/// let ptr = CpuRuntime::allocate(1024, &device)?;
/// // ... use memory ...
/// CpuRuntime::deallocate(ptr, 1024, &device);
/// # Ok::<(), ndkern::error::Error>(())
/// ```
pub trait Runtime: Clone + Send + Sync + 'static {
    /// Device identifier type
    type Device: super::Device;

    /// Client for dispatching operations
    type Client: super::RuntimeClient<Self>;

    /// Human-readable name of this runtime
    fn name() -> &'static str;

    /// Allocate device memory
    ///
    /// Returns a device address (u64). Zero-byte requests return address 0.
    /// Returns `Err(OutOfMemory)` carrying the device message if allocation fails.
    fn allocate(size_bytes: usize, device: &Self::Device) -> crate::error::Result<u64>;

    /// Release device memory obtained from [`Runtime::allocate`]
    fn deallocate(ptr: u64, size_bytes: usize, device: &Self::Device);

    /// Copy data from host to device
    ///
    /// Returns `Err(Transfer)` if the copy fails.
    fn copy_to_device(src: &[u8], dst: u64, device: &Self::Device) -> crate::error::Result<()>;

    /// Copy data from device to host
    ///
    /// The copy is ordered after all work previously enqueued on the device's
    /// stream. Returns `Err(Transfer)` if the copy fails.
    fn copy_from_device(
        src: u64,
        dst: &mut [u8],
        device: &Self::Device,
    ) -> crate::error::Result<()>;

    /// Wait for all work enqueued on the device's stream
    ///
    /// Asynchronous kernel faults are reported here as `Err(Launch)`.
    fn synchronize(device: &Self::Device) -> crate::error::Result<()>;

    /// Get the default device
    fn default_device() -> Self::Device;

    /// Get the default client for a device
    fn default_client(device: &Self::Device) -> Self::Client;
}
