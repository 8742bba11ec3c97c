//! Host Bridge: copying buffers to and from host memory
//!
//! The device side of a transfer is always the full compact buffer. Strides
//! and offset only shape the host-visible view built over the copied data.

use super::layout::StridedLayout;
use super::storage::{DeviceBuffer, ELEMENT_SIZE};
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use smallvec::SmallVec;

/// Stack allocation threshold for host-side dimension lists
const STACK_DIMS: usize = 4;

/// Host-resident copy of a device buffer, viewed through a strided layout
#[derive(Clone, Debug)]
pub struct HostArray {
    data: Vec<f32>,
    shape: SmallVec<[usize; STACK_DIMS]>,
    strides: SmallVec<[isize; STACK_DIMS]>,
    layout: StridedLayout,
}

impl HostArray {
    /// Build a compact host array from row-major data
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len()` is not the product of `shape`.
    pub fn from_vec(data: Vec<f32>, shape: &[usize]) -> Result<Self> {
        let layout = StridedLayout::contiguous(shape)?;
        if layout.numel() != data.len() {
            return Err(Error::shape_mismatch(&[layout.numel()], &[data.len()]));
        }
        Ok(Self::with_layout(data, layout))
    }

    fn with_layout(data: Vec<f32>, layout: StridedLayout) -> Self {
        Self {
            shape: layout.shape().iter().map(|&d| d as usize).collect(),
            strides: layout.strides().iter().map(|&s| s as isize).collect(),
            data,
            layout,
        }
    }

    /// Shape of the view
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Strides of the view, in elements
    #[inline]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Strides of the view scaled to bytes
    pub fn byte_strides(&self) -> SmallVec<[isize; STACK_DIMS]> {
        self.strides
            .iter()
            .map(|&s| s * ELEMENT_SIZE as isize)
            .collect()
    }

    /// Offset of the first logical element, in elements
    #[inline]
    pub fn offset(&self) -> usize {
        self.layout.offset()
    }

    /// Number of logical elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.numel()
    }

    /// True if the view covers the copied data in storage order
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous() && self.numel() == self.data.len()
    }

    /// Read one logical element by multi-dimensional index
    pub fn get(&self, index: &[usize]) -> Option<f32> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut addr = self.layout.offset() as isize;
        for ((&i, &dim), &stride) in index.iter().zip(&self.shape).zip(&self.strides) {
            if i >= dim {
                return None;
            }
            addr += i as isize * stride;
        }
        usize::try_from(addr)
            .ok()
            .and_then(|a| self.data.get(a).copied())
    }

    /// Logical elements in row-major order
    pub fn to_vec(&self) -> Vec<f32> {
        (0..self.numel())
            .map(|gid| self.data[self.layout.offset_of(gid)])
            .collect()
    }

    /// The full copied buffer in storage order
    #[inline]
    pub fn as_raw(&self) -> &[f32] {
        &self.data
    }

    /// Consume the array, returning the full copied buffer
    pub fn into_raw(self) -> Vec<f32> {
        self.data
    }
}

impl<R: Runtime> DeviceBuffer<R> {
    /// Copy the whole buffer to the host and view it through `layout`
    ///
    /// Waits for pending writes to this buffer first, so the result never
    /// observes partial data.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if the view reaches past the buffer
    /// - [`Error::Launch`] if a pending kernel faulted
    /// - [`Error::Transfer`] if the device copy fails
    pub fn to_host(&self, layout: &StridedLayout) -> Result<HostArray> {
        layout.check_bounds(self.len())?;
        let data = self.to_vec()?;
        Ok(HostArray::with_layout(data, *layout))
    }

    /// Copy a compact host array into this buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transfer`] if `host` is not compact or its element
    /// count differs from `len()`.
    pub fn from_host(&mut self, host: &HostArray) -> Result<()> {
        if !host.is_contiguous() {
            return Err(Error::Transfer(
                "host array must be compact to copy into a device buffer".to_string(),
            ));
        }
        self.copy_from_host(host.as_raw())
    }
}
