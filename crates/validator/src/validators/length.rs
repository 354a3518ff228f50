//! String length measurement and the `len` check
//!
//! By default, length is measured in Unicode scalar values (chars).
//! [`LengthMode::Bytes`] counts raw bytes instead, which is faster and is
//! what a byte-oriented column limit usually means.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

crate::validator! {
    /// Validates that a length (or number) is exactly the expected one.
    #[derive(Copy, PartialEq)]
    pub ExactLength<T: PartialOrd + Display + Copy> { length: T } for T;
    rule(self, input) { *input == self.length }
    error(self, input) {
        ValidationError::new("len", format!("Must be exactly {}", self.length))
            .with_param("expected", self.length.to_string())
            .with_param("actual", input.to_string())
    }
    fn exact_length(length: T);
}
