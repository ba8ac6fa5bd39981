use std::fmt::{Display, Formatter, Result as FmtResult};

/// Numeric view of a stored value.
///
/// Only the four numeric widths that can be stored verbatim are represented.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[allow(non_camel_case_types)]
pub enum Number {
    /// A 32-bit integer.
    i32(i32),
    /// A 64-bit integer.
    i64(i64),
    /// A 32-bit float.
    f32(f32),
    /// A 64-bit float.
    f64(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Number::i32(v) => write!(f, "{v}"),
            Number::i64(v) => write!(f, "{v}"),
            Number::f32(v) => write!(f, "{v}"),
            Number::f64(v) => write!(f, "{v}"),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::i32(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::i64(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::f32(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::f64(value)
    }
}
