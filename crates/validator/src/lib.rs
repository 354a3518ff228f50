//! # nullable-validator
//!
//! Struct validation that sees through nullable wrapper fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use nullable_validator::prelude::*;
//!
//! #[derive(Validatable)]
//! struct Signup {
//!     #[validate(required, gt = 10)]
//!     name: NullString,
//! }
//!
//! let validator = Validator::new().with_valuer::<NullString>();
//!
//! let stale = Signup { name: NullString { value: "Hello".into(), valid: false } };
//! assert!(validator.validate_struct(&stale).is_err());
//!
//! let long = Signup { name: NullString::new("hello world!".into()) };
//! assert!(validator.validate_struct(&long).is_ok());
//! ```
//!
//! ## Nullable wrappers
//!
//! A [`Null<T>`] holds a value plus a validity flag. Without an extraction
//! hook the validator treats it as an ordinary struct, so a wrapper marked
//! invalid but still holding stale data looks present. Registering the
//! [`Valuer`] hook with [`Validator::with_valuer`] makes the validator check
//! the value a database driver would see: nothing at all when invalid.
//!
//! ## Rules
//!
//! `required`, `omitempty`, `len`, `min`, `max`, `eq`, `ne`, `gt`, `gte`,
//! `lt`, `lte`; see [`rules`] for their meaning and [`parse_rules`] for the
//! string form.

// ValidationError (~100 bytes) is returned by value from every rule check.
#![allow(clippy::result_large_err)]

// Lets `#[derive(Validatable)]` output name this crate the same way inside
// and outside of it.
extern crate self as nullable_validator;

pub mod config;
pub mod engine;
pub mod foundation;
mod macros;
pub mod null;
pub mod prelude;
pub mod rules;
pub mod validators;

pub use config::ValidatorConfig;
pub use engine::{CustomType, CustomTypeFn, Validator, extract_valuer};
pub use foundation::{
    FieldRef, Inspect, Inspected, Number, RuleParseError, Validatable, ValidationError,
    ValidationErrors, ValidationResult, Value, ValuerError,
};
pub use null::{
    Null, NullBool, NullByte, NullFloat64, NullInt16, NullInt32, NullInt64, NullString, Valuer,
};
pub use rules::{Rule, parse_rules};
pub use validators::LengthMode;

#[cfg(feature = "derive")]
pub use nullable_validator_macros::Validatable;
