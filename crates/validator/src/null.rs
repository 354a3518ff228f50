//! Nullable wrapper types
//!
//! [`Null<T>`] is the shape of a SQL column that may be `NULL`: a value plus
//! an explicit validity flag. When `valid` is false the wrapper is absent,
//! whatever `value` happens to hold.
//!
//! Left alone, the validator cannot see inside a wrapper and judges it like
//! any other struct: `{ value: "Hello", valid: false }` is not the zero value,
//! so it passes `required`. Registering the [`Valuer`] extraction hook
//! ([`Validator::with_valuer`](crate::Validator::with_valuer)) makes the
//! validator read the wrapper the way a database driver would.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::foundation::{Inspect, Inspected, Value, ValuerError};

/// A value that may be SQL `NULL`.
///
/// # Examples
///
/// ```rust
/// use nullable_validator::NullString;
///
/// let name = NullString::new("alice".to_owned());
/// assert_eq!(name.as_option().map(String::as_str), Some("alice"));
///
/// let missing = NullString::from(None);
/// assert!(!missing.valid);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null<T> {
    /// The wrapped value. Meaningless when `valid` is false.
    pub value: T,
    /// Whether `value` is present.
    pub valid: bool,
}

/// Nullable text column.
pub type NullString = Null<String>;
/// Nullable `BIGINT` column.
pub type NullInt64 = Null<i64>;
/// Nullable `INTEGER` column.
pub type NullInt32 = Null<i32>;
/// Nullable `SMALLINT` column.
pub type NullInt16 = Null<i16>;
/// Nullable single byte column.
pub type NullByte = Null<u8>;
/// Nullable `DOUBLE` column.
pub type NullFloat64 = Null<f64>;
/// Nullable `BOOLEAN` column.
pub type NullBool = Null<bool>;

impl<T> Null<T> {
    /// A present value.
    pub fn new(value: T) -> Self {
        Self { value, valid: true }
    }

    /// The present value, if any.
    pub fn as_option(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    /// Consumes the wrapper, dropping stale data of an absent value.
    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }
}

impl<T: Default> Null<T> {
    /// An absent value.
    pub fn null() -> Self {
        Self::default()
    }
}

impl<T: Default> From<Option<T>> for Null<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::null(),
        }
    }
}

impl<T: Serialize> Serialize for Null<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for Null<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// VALUER
// ============================================================================

/// Types that can report their underlying value, the way a database driver
/// reads a column.
///
/// `Ok(None)` means the value is absent. Implement this for custom wrapper
/// types and register them with
/// [`Validator::register_valuer`](crate::Validator::register_valuer).
///
/// # Examples
///
/// ```rust
/// use nullable_validator::{Value, Valuer, ValuerError};
///
/// struct Cents(Option<i64>);
///
/// impl Valuer for Cents {
///     fn value(&self) -> Result<Option<Value>, ValuerError> {
///         Ok(self.0.map(Value::Int))
///     }
/// }
///
/// assert_eq!(Cents(None).value(), Ok(None));
/// ```
pub trait Valuer {
    /// The underlying value, or `None` when absent.
    fn value(&self) -> Result<Option<Value>, ValuerError>;
}

impl<T: Clone + Into<Value>> Valuer for Null<T> {
    fn value(&self) -> Result<Option<Value>, ValuerError> {
        Ok(self.as_option().cloned().map(Into::into))
    }
}

// An unregistered wrapper is an opaque struct: zero only when both parts are.
impl<T: Default + PartialEq + 'static> Inspect for Null<T> {
    fn inspect_field(&self) -> Inspected<'_> {
        Inspected::Opaque {
            zero: self.is_zero(),
        }
    }

    fn is_zero(&self) -> bool {
        !self.valid && self.value == T::default()
    }
}
