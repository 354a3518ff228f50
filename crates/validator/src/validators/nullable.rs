//! Presence check behind the `required` rule
//!
//! A value is present when it was extracted at all and is not the zero value
//! of its kind. An empty string or a `0` counts as missing, the same as an
//! absent nullable wrapper.
//!
//! # Examples
//!
//! ```rust
//! use nullable_validator::Value;
//! use nullable_validator::foundation::Validate;
//! use nullable_validator::validators::required;
//!
//! assert!(required().validate(&Some(Value::from("hello"))).is_ok());
//! assert!(required().validate(&Some(Value::from(""))).is_err());
//! assert!(required().validate(&None).is_err());
//! ```

use crate::foundation::{ValidationError, Value};

crate::validator! {
    /// Validates that an extracted value is present and non-zero.
    pub Required for Option<Value>;
    rule(input) { input.as_ref().is_some_and(|value| !value.is_zero()) }
    error(input) { ValidationError::required() }
    fn required();
}

/// Alias for [`Required`], for readers coming from SQL.
pub type NotNull = Required;
