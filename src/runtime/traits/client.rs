//! Trait for runtime clients that handle operation dispatch

use super::Runtime;

/// Trait for runtime clients that handle operation dispatch
///
/// Every operation trait in [`crate::ops`] is implemented by a client. Launches
/// return once the work is enqueued; ordering between launches from one client
/// is preserved.
pub trait RuntimeClient<R: Runtime>: Clone + Send + Sync {
    /// Get the device this client operates on
    fn device(&self) -> &R::Device;

    /// Synchronize: wait for all pending operations to complete
    fn synchronize(&self) -> crate::error::Result<()>;
}
