//! Core trait for single-value checks
//!
//! Each rule of the tag language is backed by a small [`Validate`]
//! implementation in [`validators`](crate::validators).

use crate::foundation::ValidationError;

/// The trait every rule check implements.
///
/// Generic over the input type so a check only ever sees the shape of value
/// it knows how to judge.
///
/// # Examples
///
/// ```rust
/// use nullable_validator::foundation::{Validate, ValidationError};
///
/// struct NonNegative;
///
/// impl Validate for NonNegative {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if *input >= 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("non_negative", "Must not be negative"))
///         }
///     }
/// }
///
/// assert!(NonNegative.validate(&3).is_ok());
/// assert!(NonNegative.validate(&-3).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}
