//! Static field inspection
//!
//! Rust has no runtime struct reflection, so a struct takes part in
//! validation by implementing [`Validatable`] (normally through
//! `#[derive(Validatable)]`), which lists its fields, and every field type
//! implements [`Inspect`], which tells the engine what the field holds.

use std::any::Any;
use std::fmt;

use crate::foundation::Value;
use crate::rules::Rule;

// ============================================================================
// VALIDATABLE
// ============================================================================

/// A struct whose fields can be walked by the [`Validator`](crate::Validator).
///
/// # Examples
///
/// Implemented by hand (the derive macro generates the same):
///
/// ```rust
/// use nullable_validator::{FieldRef, Rule, Validatable};
///
/// struct Login {
///     user: String,
/// }
///
/// impl Validatable for Login {
///     fn fields(&self) -> Vec<FieldRef<'_>> {
///         const USER: &[Rule] = &[Rule::Required];
///         vec![FieldRef::new("user", USER, &self.user)]
///     }
/// }
/// ```
pub trait Validatable {
    /// Fields in declaration order, each with its declared rules.
    fn fields(&self) -> Vec<FieldRef<'_>>;
}

/// One field of a [`Validatable`] struct.
#[derive(Clone, Copy)]
pub struct FieldRef<'a> {
    name: &'static str,
    rules: &'a [Rule],
    value: &'a dyn Inspect,
}

impl<'a> FieldRef<'a> {
    /// Creates a field reference.
    pub fn new(name: &'static str, rules: &'a [Rule], value: &'a dyn Inspect) -> Self {
        Self { name, rules, value }
    }

    /// Field name as declared.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rules declared on the field.
    pub fn rules(&self) -> &'a [Rule] {
        self.rules
    }

    /// The field's current value.
    pub fn value(&self) -> &'a dyn Inspect {
        self.value
    }
}

impl fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRef")
            .field("name", &self.name)
            .field("rules", &self.rules)
            .field("value", &"<dyn Inspect>")
            .finish()
    }
}

// ============================================================================
// INSPECT
// ============================================================================

/// What a field holds, from the engine's point of view.
pub enum Inspected<'a> {
    /// A primitive value, or `None` when absent.
    Value(Option<Value>),
    /// A nested struct to recurse into.
    Struct(&'a dyn Validatable),
    /// A value the engine cannot look into; only its zero-ness is known.
    Opaque {
        /// Whether every part of the value is zero.
        zero: bool,
    },
}

impl fmt::Debug for Inspected<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inspected::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Inspected::Struct(_) => f.write_str("Struct(..)"),
            Inspected::Opaque { zero } => f.debug_struct("Opaque").field("zero", zero).finish(),
        }
    }
}

/// Field types the engine can look at.
///
/// The `Any` supertrait lets the engine key extraction hooks by the field's
/// concrete type.
pub trait Inspect: Any {
    /// Describes the field's content.
    fn inspect_field(&self) -> Inspected<'_>;

    /// Whether the field holds its type's zero value.
    fn is_zero(&self) -> bool;

    /// The value behind an indirection, when one is set.
    ///
    /// The engine follows it before looking up extraction hooks, so a hook
    /// registered for `T` also applies to an `Option<T>` field.
    fn pointee(&self) -> Option<&dyn Inspect> {
        None
    }
}

macro_rules! inspect_copy {
    ($($ty:ty),+ $(,)?) => {$(
        impl Inspect for $ty {
            fn inspect_field(&self) -> Inspected<'_> {
                Inspected::Value(Some(Value::from(*self)))
            }

            fn is_zero(&self) -> bool {
                Value::from(*self).is_zero()
            }
        }
    )+};
}

inspect_copy!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl Inspect for String {
    fn inspect_field(&self) -> Inspected<'_> {
        Inspected::Value(Some(Value::Text(self.clone())))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Inspect for Vec<u8> {
    fn inspect_field(&self) -> Inspected<'_> {
        Inspected::Value(Some(Value::Bytes(self.clone())))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn inspect_field(&self) -> Inspected<'_> {
        match self {
            Some(inner) => inner.inspect_field(),
            None => Inspected::Value(None),
        }
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn pointee(&self) -> Option<&dyn Inspect> {
        self.as_ref().map(|inner| inner as &dyn Inspect)
    }
}
