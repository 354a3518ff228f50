//! Core validation types and traits
//!
//! - **Traits**: [`Validate`] for rule checks, [`Inspect`] and
//!   [`Validatable`] for walking struct fields
//! - **Values**: [`Value`] and [`Number`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ValuerError`],
//!   [`RuleParseError`]

pub mod error;
pub mod inspect;
pub mod traits;
pub mod value;

pub use error::{RuleParseError, ValidationError, ValidationErrors, ValuerError};
pub use inspect::{FieldRef, Inspect, Inspected, Validatable};
pub use traits::Validate;
pub use value::{Number, ParseNumberError, Value};

/// A validation result that can contain multiple errors.
pub type ValidationResult = Result<(), ValidationErrors>;
