//! Error types for validation failures
//!
//! [`ValidationError`] describes one violated rule on one field, and
//! [`ValidationErrors`] is the aggregate a struct validation returns. Both
//! use `Cow<'static, str>` so static codes and messages never allocate.
//!
//! [`ValuerError`] and [`RuleParseError`] cover the two places where
//! configuration, not input, can be wrong.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single rule violation.
///
/// The `code` is the tag of the rule that failed (`required`, `gt`, ...), so
/// callers can branch on it without parsing the message.
///
/// # Examples
///
/// ```rust
/// use nullable_validator::ValidationError;
///
/// let error = ValidationError::new("gt", "Must be greater than 10")
///     .with_field("name")
///     .with_param("bound", "10");
///
/// assert_eq!(error.field.as_deref(), Some("name"));
/// assert_eq!(error.param("bound"), Some("10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Tag of the rule that failed.
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Dotted path of the failing field, e.g. `"account.owner.name"`.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A `required` field had no value, or only a zero value.
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// A non-`required` rule was applied to an absent value.
    pub fn absent(tag: &'static str) -> Self {
        Self::new(tag, "Value is absent")
    }

    /// A comparison rule was applied to a value it cannot measure.
    pub fn unsupported(tag: &'static str, kind: &'static str) -> Self {
        Self::new(tag, format!("Rule `{tag}` cannot be applied to a {kind} value"))
            .with_param("kind", kind)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Every violation found in one validation call, in field order.
///
/// Never empty when returned as an `Err`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Field paths of all errors, in order.
    pub fn fields(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter_map(|error| error.field.as_deref())
            .collect()
    }

    /// Returns the first error reported for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|error| error.field.as_deref() == Some(field))
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// Failure of a [`Valuer`](crate::Valuer) to produce its underlying value.
///
/// The validator never surfaces this to callers; a failing valuer is read as
/// an absent value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValuerError {
    /// The wrapped value has no [`Value`](crate::Value) representation.
    #[error("value of type `{type_name}` has no validation representation")]
    Unsupported {
        /// Rust type name of the wrapped value.
        type_name: &'static str,
    },

    /// The wrapper's state could not be read.
    #[error("invalid wrapper state: {0}")]
    Invalid(String),
}

/// Error produced by [`parse_rules`](crate::parse_rules).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleParseError {
    /// The tag does not name a known rule.
    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    /// The rule takes a parameter but none was given.
    #[error("rule `{0}` requires a parameter")]
    MissingParam(&'static str),

    /// The rule takes no parameter but one was given.
    #[error("rule `{0}` does not take a parameter")]
    UnexpectedParam(&'static str),

    /// The parameter is not a finite number.
    #[error("invalid parameter `{param}` for rule `{rule}`")]
    InvalidParam {
        /// Rule tag.
        rule: &'static str,
        /// Parameter as written.
        param: String,
    },

    /// Two commas with nothing between them.
    #[error("empty rule at position {0}")]
    EmptyRule(usize),
}

// ============================================================================
// TESTS
// ============================================================================
