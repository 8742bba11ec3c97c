//! Element-wise operations traits.
//!
//! Binary, scalar, and unary maps over compact buffers of equal length.
//! Each family has one enum-dispatched entry point; the named methods are
//! thin wrappers over it.

use crate::buffer::DeviceBuffer;
use crate::error::Result;
use crate::ops::{EwiseOp, ScalarOp, UnaryOp};
use crate::runtime::Runtime;

/// Element-wise binary operations: `out[i] = op(a[i], b[i])`
///
/// # Example
///
/// ```
/// use ndkern::prelude::*;
/// # use ndkern::runtime::cpu::{CpuDevice, CpuRuntime};
///
/// let device = CpuDevice::new();
/// let client = CpuRuntime::default_client(&device);
///
/// let a = DeviceBuffer::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0], &device)?;
/// let b = DeviceBuffer::<CpuRuntime>::from_slice(&[4.0, 5.0, 6.0], &device)?;
/// let mut out = DeviceBuffer::<CpuRuntime>::new(3, &device)?;
///
/// client.ewise_add(&a, &b, &mut out)?;
/// assert_eq!(out.to_vec()?, vec![5.0, 7.0, 9.0]);
/// # Ok::<(), ndkern::error::Error>(())
/// ```
pub trait EwiseOps<R: Runtime> {
    /// Apply `op` element-wise
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`](crate::error::Error::ShapeMismatch) if
    /// `a`, `b` and `out` differ in length.
    fn ewise(
        &self,
        op: EwiseOp,
        a: &DeviceBuffer<R>,
        b: &DeviceBuffer<R>,
        out: &mut DeviceBuffer<R>,
    ) -> Result<()>;

    /// Element-wise addition: a + b
    fn ewise_add(
        &self,
        a: &DeviceBuffer<R>,
        b: &DeviceBuffer<R>,
        out: &mut DeviceBuffer<R>,
    ) -> Result<()> {
        self.ewise(EwiseOp::Add, a, b, out)
    }

    /// Element-wise multiplication: a * b
    fn ewise_mul(
        &self,
        a: &DeviceBuffer<R>,
        b: &DeviceBuffer<R>,
        out: &mut DeviceBuffer<R>,
    ) -> Result<()> {
        self.ewise(EwiseOp::Mul, a, b, out)
    }

    /// Element-wise division: a / b
    ///
    /// Division by zero yields ±inf or NaN, not an error.
    fn ewise_div(
        &self,
        a: &DeviceBuffer<R>,
        b: &DeviceBuffer<R>,
        out: &mut DeviceBuffer<R>,
    ) -> Result<()> {
        self.ewise(EwiseOp::Div, a, b, out)
    }

    /// Element-wise maximum: max(a, b)
    fn ewise_maximum(
        &self,
        a: &DeviceBuffer<R>,
        b: &DeviceBuffer<R>,
        out: &mut DeviceBuffer<R>,
    ) -> Result<()> {
        self.ewise(EwiseOp::Maximum, a, b, out)
    }

    /// Element-wise equality: 1.0 where a == b, else 0.0
    fn ewise_eq(
        &self,
        a: &DeviceBuffer<R>,
        b: &DeviceBuffer<R>,
        out: &mut DeviceBuffer<R>,
    ) -> Result<()> {
        self.ewise(EwiseOp::Eq, a, b, out)
    }

    /// Element-wise greater-or-equal: 1.0 where a >= b, else 0.0
    fn ewise_ge(
        &self,
        a: &DeviceBuffer<R>,
        b: &DeviceBuffer<R>,
        out: &mut DeviceBuffer<R>,
    ) -> Result<()> {
        self.ewise(EwiseOp::Ge, a, b, out)
    }
}

/// Element-wise operations against a broadcast scalar: `out[i] = op(a[i], v)`
pub trait ScalarOps<R: Runtime> {
    /// Apply `op` between every element of `a` and `value`
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`](crate::error::Error::ShapeMismatch) if
    /// `a` and `out` differ in length.
    fn scalar(
        &self,
        op: ScalarOp,
        a: &DeviceBuffer<R>,
        value: f32,
        out: &mut DeviceBuffer<R>,
    ) -> Result<()>;

    /// Add scalar: a + v
    fn scalar_add(&self, a: &DeviceBuffer<R>, value: f32, out: &mut DeviceBuffer<R>) -> Result<()> {
        self.scalar(ScalarOp::Add, a, value, out)
    }

    /// Multiply by scalar: a * v
    fn scalar_mul(&self, a: &DeviceBuffer<R>, value: f32, out: &mut DeviceBuffer<R>) -> Result<()> {
        self.scalar(ScalarOp::Mul, a, value, out)
    }

    /// Divide by scalar: a / v
    fn scalar_div(&self, a: &DeviceBuffer<R>, value: f32, out: &mut DeviceBuffer<R>) -> Result<()> {
        self.scalar(ScalarOp::Div, a, value, out)
    }

    /// Maximum with scalar: max(a, v)
    fn scalar_maximum(
        &self,
        a: &DeviceBuffer<R>,
        value: f32,
        out: &mut DeviceBuffer<R>,
    ) -> Result<()> {
        self.scalar(ScalarOp::Maximum, a, value, out)
    }

    /// Equality with scalar: 1.0 where a == v, else 0.0
    fn scalar_eq(&self, a: &DeviceBuffer<R>, value: f32, out: &mut DeviceBuffer<R>) -> Result<()> {
        self.scalar(ScalarOp::Eq, a, value, out)
    }

    /// Greater-or-equal than scalar: 1.0 where a >= v, else 0.0
    fn scalar_ge(&self, a: &DeviceBuffer<R>, value: f32, out: &mut DeviceBuffer<R>) -> Result<()> {
        self.scalar(ScalarOp::Ge, a, value, out)
    }

    /// Raise to scalar power: a^v
    fn scalar_power(
        &self,
        a: &DeviceBuffer<R>,
        value: f32,
        out: &mut DeviceBuffer<R>,
    ) -> Result<()> {
        self.scalar(ScalarOp::Power, a, value, out)
    }
}

/// Element-wise unary operations: `out[i] = op(a[i])`
///
/// Out-of-domain inputs produce NaN or ±inf and are propagated, never trapped.
pub trait UnaryOps<R: Runtime> {
    /// Apply `op` to every element of `a`
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`](crate::error::Error::ShapeMismatch) if
    /// `a` and `out` differ in length.
    fn unary(&self, op: UnaryOp, a: &DeviceBuffer<R>, out: &mut DeviceBuffer<R>) -> Result<()>;

    /// Natural logarithm
    fn ewise_log(&self, a: &DeviceBuffer<R>, out: &mut DeviceBuffer<R>) -> Result<()> {
        self.unary(UnaryOp::Log, a, out)
    }

    /// Exponential
    fn ewise_exp(&self, a: &DeviceBuffer<R>, out: &mut DeviceBuffer<R>) -> Result<()> {
        self.unary(UnaryOp::Exp, a, out)
    }

    /// Hyperbolic tangent
    fn ewise_tanh(&self, a: &DeviceBuffer<R>, out: &mut DeviceBuffer<R>) -> Result<()> {
        self.unary(UnaryOp::Tanh, a, out)
    }
}
