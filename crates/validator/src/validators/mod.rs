//! Built-in rule checks
//!
//! One [`Validate`](crate::foundation::Validate) implementation per rule of
//! the tag language. The engine picks the check from a [`Rule`](crate::Rule)
//! and feeds it either the extracted value (`required`) or the value's
//! measure (every comparison).
//!
//! # Examples
//!
//! ```rust
//! use nullable_validator::foundation::Validate;
//! use nullable_validator::validators::{greater_than, min};
//!
//! assert!(greater_than(10).validate(&11).is_ok());
//! assert!(min(3).validate(&2).is_err());
//! ```

pub mod length;
pub mod nullable;
pub mod range;

pub use length::{ExactLength, LengthMode, exact_length};
pub use nullable::{NotNull, Required, required};
pub use range::{
    EqualTo, GreaterOrEqual, GreaterThan, LessOrEqual, LessThan, Max, Min, NotEqualTo, equal_to,
    greater_or_equal, greater_than, less_or_equal, less_than, max, min, not_equal_to,
};
