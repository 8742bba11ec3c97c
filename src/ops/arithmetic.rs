//! Arithmetic operation kinds
//!
//! Each variant maps to one device kernel (by name) and one pure scalar
//! function, which doubles as the CPU kernel body. Operands are compact
//! buffers; callers materialize strided views with `compact` first.

use crate::error::{Error, Result};

/// Element-wise binary operation kind: `out[i] = f(a[i], b[i])`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EwiseOp {
    /// Addition: a + b
    Add,
    /// Multiplication: a * b
    Mul,
    /// Division: a / b
    Div,
    /// Maximum: max(a, b)
    Maximum,
    /// Equality: 1.0 if a == b, else 0.0
    Eq,
    /// Greater-or-equal: 1.0 if a >= b, else 0.0
    Ge,
}

impl EwiseOp {
    /// All binary kinds, in kernel declaration order
    pub const ALL: [EwiseOp; 6] = [
        EwiseOp::Add,
        EwiseOp::Mul,
        EwiseOp::Div,
        EwiseOp::Maximum,
        EwiseOp::Eq,
        EwiseOp::Ge,
    ];

    /// Short operation name
    pub fn name(self) -> &'static str {
        match self {
            EwiseOp::Add => "add",
            EwiseOp::Mul => "mul",
            EwiseOp::Div => "div",
            EwiseOp::Maximum => "maximum",
            EwiseOp::Eq => "eq",
            EwiseOp::Ge => "ge",
        }
    }

    /// Entry point of the device kernel
    pub fn kernel_name(self) -> &'static str {
        match self {
            EwiseOp::Add => "ewise_add",
            EwiseOp::Mul => "ewise_mul",
            EwiseOp::Div => "ewise_div",
            EwiseOp::Maximum => "ewise_maximum",
            EwiseOp::Eq => "ewise_eq",
            EwiseOp::Ge => "ewise_ge",
        }
    }

    /// Apply to one pair of elements
    #[inline(always)]
    pub fn apply(self, a: f32, b: f32) -> f32 {
        match self {
            EwiseOp::Add => a + b,
            EwiseOp::Mul => a * b,
            EwiseOp::Div => a / b,
            EwiseOp::Maximum => a.max(b),
            EwiseOp::Eq => bool_to_f32(a == b),
            EwiseOp::Ge => bool_to_f32(a >= b),
        }
    }
}

/// Element-wise operation against a broadcast scalar: `out[i] = f(a[i], v)`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScalarOp {
    /// Addition: a + v
    Add,
    /// Multiplication: a * v
    Mul,
    /// Division: a / v
    Div,
    /// Maximum: max(a, v)
    Maximum,
    /// Equality: 1.0 if a == v, else 0.0
    Eq,
    /// Greater-or-equal: 1.0 if a >= v, else 0.0
    Ge,
    /// Power: a^v
    Power,
}

impl ScalarOp {
    /// All scalar kinds, in kernel declaration order
    pub const ALL: [ScalarOp; 7] = [
        ScalarOp::Add,
        ScalarOp::Mul,
        ScalarOp::Div,
        ScalarOp::Maximum,
        ScalarOp::Eq,
        ScalarOp::Ge,
        ScalarOp::Power,
    ];

    /// Short operation name
    pub fn name(self) -> &'static str {
        match self {
            ScalarOp::Add => "add",
            ScalarOp::Mul => "mul",
            ScalarOp::Div => "div",
            ScalarOp::Maximum => "maximum",
            ScalarOp::Eq => "eq",
            ScalarOp::Ge => "ge",
            ScalarOp::Power => "power",
        }
    }

    /// Entry point of the device kernel
    pub fn kernel_name(self) -> &'static str {
        match self {
            ScalarOp::Add => "scalar_add",
            ScalarOp::Mul => "scalar_mul",
            ScalarOp::Div => "scalar_div",
            ScalarOp::Maximum => "scalar_maximum",
            ScalarOp::Eq => "scalar_eq",
            ScalarOp::Ge => "scalar_ge",
            ScalarOp::Power => "scalar_power",
        }
    }

    /// Apply to one element and the scalar
    #[inline(always)]
    pub fn apply(self, a: f32, v: f32) -> f32 {
        match self {
            ScalarOp::Add => a + v,
            ScalarOp::Mul => a * v,
            ScalarOp::Div => a / v,
            ScalarOp::Maximum => a.max(v),
            ScalarOp::Eq => bool_to_f32(a == v),
            ScalarOp::Ge => bool_to_f32(a >= v),
            ScalarOp::Power => a.powf(v),
        }
    }
}

/// Element-wise unary operation kind: `out[i] = f(a[i])`
///
/// Out-of-domain inputs yield IEEE-754 special values (`log(-1) = NaN`,
/// `log(0) = -inf`); they are never reported as errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Natural log: ln(a)
    Log,
    /// Exponential: e^a
    Exp,
    /// Hyperbolic tangent: tanh(a)
    Tanh,
}

impl UnaryOp {
    /// All unary kinds, in kernel declaration order
    pub const ALL: [UnaryOp; 3] = [UnaryOp::Log, UnaryOp::Exp, UnaryOp::Tanh];

    /// Short operation name
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Log => "log",
            UnaryOp::Exp => "exp",
            UnaryOp::Tanh => "tanh",
        }
    }

    /// Entry point of the device kernel
    pub fn kernel_name(self) -> &'static str {
        match self {
            UnaryOp::Log => "ewise_log",
            UnaryOp::Exp => "ewise_exp",
            UnaryOp::Tanh => "ewise_tanh",
        }
    }

    /// Apply to one element
    #[inline(always)]
    pub fn apply(self, a: f32) -> f32 {
        match self {
            UnaryOp::Log => a.ln(),
            UnaryOp::Exp => a.exp(),
            UnaryOp::Tanh => a.tanh(),
        }
    }
}

#[inline(always)]
fn bool_to_f32(b: bool) -> f32 {
    if b { 1.0 } else { 0.0 }
}

/// Check that every operand of an element-wise map holds `expected` elements
///
/// The first mismatching length is reported as [`Error::ShapeMismatch`].
pub fn validate_same_len(expected: usize, lens: &[usize]) -> Result<()> {
    match lens.iter().find(|&&len| len != expected) {
        Some(&len) => Err(Error::shape_mismatch(&[expected], &[len])),
        None => Ok(()),
    }
}
