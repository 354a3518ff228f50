//! The struct validator
//!
//! [`Validator`] walks the fields of a [`Validatable`] struct and checks each
//! one against its declared [`Rule`]s. Before the rules run, a field whose
//! concrete type has a registered extraction hook is reduced to whatever the
//! hook reports, which is how nullable wrappers are seen through.
//!
//! # Examples
//!
//! ```rust
//! use nullable_validator::{FieldRef, NullString, Rule, Validatable, Validator};
//!
//! struct Account {
//!     name: NullString,
//! }
//!
//! impl Validatable for Account {
//!     fn fields(&self) -> Vec<FieldRef<'_>> {
//!         const NAME: &[Rule] = &[Rule::Required];
//!         vec![FieldRef::new("name", NAME, &self.name)]
//!     }
//! }
//!
//! let validator = Validator::new().with_valuer::<NullString>();
//! let stale = Account {
//!     name: NullString { value: "Hello".into(), valid: false },
//! };
//!
//! let errors = validator.validate_struct(&stale).unwrap_err();
//! assert_eq!(errors.fields(), vec!["name"]);
//! ```

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::config::ValidatorConfig;
use crate::foundation::{
    Inspect, Inspected, Validatable, Validate, ValidationError, ValidationErrors, Value,
};
use crate::null::Valuer;
use crate::rules::Rule;
use crate::validators::required;

/// Extraction hook: reads a field of the registered type and returns its
/// underlying value, or `None` when the value is absent.
pub type CustomTypeFn = fn(&dyn Any) -> Option<Value>;

/// A registered extraction hook.
#[derive(Debug, Clone, Copy)]
pub struct CustomType {
    type_name: &'static str,
    hook: CustomTypeFn,
}

impl CustomType {
    /// Rust name of the registered type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The hook itself.
    pub fn hook(&self) -> CustomTypeFn {
        self.hook
    }
}

/// The standard hook for [`Valuer`] types.
///
/// A field of another type, a `None` from the valuer, and a valuer error all
/// read as absent.
pub fn extract_valuer<T: Valuer + Any>(field: &dyn Any) -> Option<Value> {
    let wrapper = field.downcast_ref::<T>()?;
    match wrapper.value() {
        Ok(value) => value,
        Err(error) => {
            debug!(
                type_name = type_name::<T>(),
                error = %error,
                "valuer failed, treating value as absent"
            );
            None
        }
    }
}

/// Validates structs against their declared rules.
///
/// Configure it once (registration takes `&mut self`), then share it freely:
/// validation only needs `&self`, and the validator is `Send + Sync`.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
    custom_types: HashMap<TypeId, CustomType>,
}

impl Validator {
    /// A validator with `required` applied to struct-typed fields and no
    /// extraction hooks.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// A validator with explicit configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            config,
            custom_types: HashMap::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Registers an extraction hook for fields of type `T`.
    ///
    /// Registering the same type again replaces the earlier hook and returns
    /// it.
    pub fn register_custom_type<T: Any>(&mut self, hook: CustomTypeFn) -> Option<CustomTypeFn> {
        let type_name = type_name::<T>();
        let previous = self
            .custom_types
            .insert(TypeId::of::<T>(), CustomType { type_name, hook })
            .map(|custom| custom.hook);

        if previous.is_some() {
            warn!(type_name, "extraction hook replaced");
        } else {
            debug!(type_name, "extraction hook registered");
        }
        previous
    }

    /// Registers [`extract_valuer`] for `T`.
    pub fn register_valuer<T: Valuer + Any>(&mut self) -> Option<CustomTypeFn> {
        self.register_custom_type::<T>(extract_valuer::<T>)
    }

    /// Builder form of [`register_valuer`](Self::register_valuer).
    #[must_use]
    pub fn with_valuer<T: Valuer + Any>(mut self) -> Self {
        self.register_valuer::<T>();
        self
    }

    /// Builder form of [`register_custom_type`](Self::register_custom_type).
    #[must_use]
    pub fn with_custom_type<T: Any>(mut self, hook: CustomTypeFn) -> Self {
        self.register_custom_type::<T>(hook);
        self
    }

    /// Whether a hook is registered for `T`.
    pub fn has_custom_type<T: Any>(&self) -> bool {
        self.custom_types.contains_key(&TypeId::of::<T>())
    }

    /// The hook registered for `T`, if any.
    pub fn custom_type<T: Any>(&self) -> Option<&CustomType> {
        self.custom_types.get(&TypeId::of::<T>())
    }

    /// Number of registered hooks.
    pub fn custom_type_count(&self) -> usize {
        self.custom_types.len()
    }

    /// Checks every field of `value`, descending into nested structs.
    ///
    /// Checking a field stops at its first failing rule; every failing field
    /// is reported, nested ones under a dotted path (`address.city`).
    pub fn validate_struct(&self, value: &dyn Validatable) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.walk(value, None, &mut errors);
        debug!(errors = errors.len(), "struct validation finished");
        errors.into_result()
    }

    /// Checks a single value against `rules`.
    ///
    /// Extraction hooks apply as they do to struct fields. Errors carry no
    /// field path, except those from inside a nested struct.
    pub fn validate_var(
        &self,
        value: &dyn Inspect,
        rules: &[Rule],
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.check_field(value, rules, None, false, &mut errors);
        errors.into_result()
    }

    fn walk(&self, value: &dyn Validatable, prefix: Option<&str>, errors: &mut ValidationErrors) {
        for field in value.fields() {
            let path = match prefix {
                Some(prefix) => format!("{prefix}.{}", field.name()),
                None => field.name().to_owned(),
            };
            trace!(field = %path, rules = field.rules().len(), "checking field");
            self.check_field(field.value(), field.rules(), Some(path.as_str()), false, errors);
        }
    }

    /// `behind_pointer` is set once an indirection has been followed: a set
    /// `Option` satisfies `required` and defeats `omitempty` even when the
    /// value it holds is zero.
    fn check_field(
        &self,
        value: &dyn Inspect,
        rules: &[Rule],
        path: Option<&str>,
        behind_pointer: bool,
        errors: &mut ValidationErrors,
    ) {
        let located = |error: ValidationError| match path {
            Some(path) => error.with_field(path.to_owned()),
            None => error,
        };

        // A hook registered for the field's type (or the type behind its
        // indirection) replaces the field's own inspection.
        let any: &dyn Any = value;
        if let Some(custom) = self.custom_types.get(&any.type_id()) {
            let extracted = (custom.hook)(any);
            if let Err(error) = self.check_value(&extracted, rules, behind_pointer) {
                errors.add(located(error));
            }
            return;
        }
        if let Some(inner) = value.pointee() {
            return self.check_field(inner, rules, path, true, errors);
        }

        match value.inspect_field() {
            Inspected::Value(extracted) => {
                if let Err(error) = self.check_value(&extracted, rules, behind_pointer) {
                    errors.add(located(error));
                }
            }
            Inspected::Struct(nested) => {
                let zero = value.is_zero() && !behind_pointer;
                match self.check_composite(zero, rules, "struct") {
                    Ok(true) => self.walk(nested, path, errors),
                    Ok(false) => {}
                    Err(error) => errors.add(located(error)),
                }
            }
            Inspected::Opaque { zero } => {
                if let Err(error) = self.check_composite(zero && !behind_pointer, rules, "opaque") {
                    errors.add(located(error));
                }
            }
        }
    }

    /// Rules run in order; `omitempty` ends the check when reached on an
    /// empty value, so rules written before it still apply.
    fn check_value(
        &self,
        value: &Option<Value>,
        rules: &[Rule],
        behind_pointer: bool,
    ) -> Result<(), ValidationError> {
        let has_value = value
            .as_ref()
            .is_some_and(|present| behind_pointer || !present.is_zero());

        for rule in rules {
            match rule {
                Rule::OmitEmpty if !has_value => return Ok(()),
                Rule::OmitEmpty => {}
                Rule::Required if has_value => {}
                Rule::Required => required().validate(value)?,
                comparison => {
                    let Some(present) = value else {
                        return Err(ValidationError::absent(comparison.tag()));
                    };
                    let measure = present.measure(self.config.length_mode).ok_or_else(|| {
                        ValidationError::unsupported(comparison.tag(), present.kind())
                    })?;
                    comparison.compare(measure)?;
                }
            }
        }
        Ok(())
    }

    /// Rules on a struct or opaque field. `Ok(true)` means descend.
    fn check_composite(
        &self,
        zero: bool,
        rules: &[Rule],
        kind: &'static str,
    ) -> Result<bool, ValidationError> {
        for rule in rules {
            match rule {
                Rule::OmitEmpty if zero => return Ok(false),
                Rule::OmitEmpty => {}
                Rule::Required => {
                    if zero && self.config.required_struct {
                        return Err(ValidationError::required());
                    }
                }
                comparison => return Err(ValidationError::unsupported(comparison.tag(), kind)),
            }
        }
        Ok(true)
    }
}
