//! Integration tests for nullable-validator.
//!
//! Exercises the derive macro, the validator, and the nullable wrappers
//! together, the way a caller uses them.

mod nested;
mod nullable_fields;
mod plain_fields;
mod registry;

use nullable_validator::prelude::*;

/// A validator set up the way applications set one up: required-struct
/// checking on, hooks for the wrappers in use.
pub fn make_validator() -> Validator {
    Validator::new()
        .with_valuer::<NullString>()
        .with_valuer::<NullInt64>()
}

/// A wrapper marked absent that still holds `value`.
pub fn stale(value: &str) -> NullString {
    NullString {
        value: value.to_owned(),
        valid: false,
    }
}
