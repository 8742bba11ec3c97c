//! Device buffers and the metadata that describes views over them
//!
//! - [`DeviceBuffer`] owns one flat f32 allocation on a device
//! - [`ShapeVector`] carries up to 8 shape or stride entries into kernels by value
//! - [`StridedLayout`] bundles shape, strides, and offset of a strided view
//! - [`HostArray`] is the host-side result of the Host Bridge

mod host;
mod layout;
mod shape;
mod storage;

pub use host::HostArray;
pub use layout::{StridedLayout, strided_offset};
pub use shape::{MAX_DIMS, ShapeVector};
pub use storage::{DeviceBuffer, ELEMENT_SIZE};
