//! Prelude module for convenient imports.
//!
//! ```rust
//! use nullable_validator::prelude::*;
//!
//! let validator = Validator::new().with_valuer::<NullString>();
//! assert!(validator.has_custom_type::<NullString>());
//! ```

pub use crate::foundation::{
    FieldRef, Inspect, Inspected, Number, Validatable, Validate, ValidationError,
    ValidationErrors, ValidationResult, Value,
};

pub use crate::null::{
    Null, NullBool, NullByte, NullFloat64, NullInt16, NullInt32, NullInt64, NullString, Valuer,
};

pub use crate::config::ValidatorConfig;
pub use crate::engine::Validator;
pub use crate::rules::{Rule, parse_rules};
pub use crate::validators::LengthMode;

#[cfg(feature = "derive")]
pub use nullable_validator_macros::Validatable;
