//! Values as the rule engine sees them
//!
//! Every field is reduced to an optional [`Value`] before its rules run;
//! `None` is the absence marker. Comparison rules then reduce the value to a
//! [`Number`]: its length for text and bytes, itself for numbers.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::validators::LengthMode;

// ============================================================================
// VALUE
// ============================================================================

/// A primitive value extracted from a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 text.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl Value {
    /// Whether this is the zero value of its kind (`false`, `0`, `""`, empty bytes).
    ///
    /// `-0.0` is not zero, only the all-zero bit pattern is.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Uint(n) => *n == 0,
            Value::Float(n) => n.to_bits() == 0,
            Value::Text(s) => s.is_empty(),
            Value::Bytes(b) => b.is_empty(),
        }
    }

    /// Reduces the value to the number comparison rules operate on.
    ///
    /// Returns `None` for booleans, which have no order.
    pub fn measure(&self, mode: LengthMode) -> Option<Number> {
        match self {
            Value::Bool(_) => None,
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Uint(n) => Some(Number::Uint(*n)),
            Value::Float(n) => Some(Number::Float(*n)),
            Value::Text(s) => Some(Number::Uint(mode.measure(s) as u64)),
            Value::Bytes(b) => Some(Number::Uint(b.len() as u64)),
        }
    }

    /// Short name of the value's kind, used in error parameters.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {$(
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value.into())
            }
        }
    )+};
}

value_from! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    f32 => Float,
    f64 => Float,
    String => Text,
    &str => Text,
    Vec<u8> => Bytes,
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Uint(value as u64)
    }
}

// ============================================================================
// NUMBER
// ============================================================================

/// Operand of a comparison rule.
///
/// Integer pairs compare exactly; a float on either side makes the
/// comparison happen in `f64`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
}

impl Number {
    fn as_i128(self) -> Option<i128> {
        match self {
            Number::Int(n) => Some(i128::from(n)),
            Number::Uint(n) => Some(i128::from(n)),
            Number::Float(_) => None,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Uint(n) => n as f64,
            Number::Float(n) => n,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.as_i128(), other.as_i128()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Uint(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

/// A rule parameter that is not a finite number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a finite number")]
pub struct ParseNumberError(pub String);

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Number::Int(n));
        }
        if let Ok(n) = s.parse::<u64>() {
            return Ok(Number::Uint(n));
        }
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Number::Float(n)),
            _ => Err(ParseNumberError(s.to_owned())),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
