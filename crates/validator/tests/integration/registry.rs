//! Extraction hook registration.

use std::any::Any;

use nullable_validator::prelude::*;
use nullable_validator::{ValuerError, extract_valuer};
use pretty_assertions::assert_eq;

use crate::stale;

#[derive(Validatable)]
struct Named {
    #[validate(required)]
    name: NullString,
}

/// A custom wrapper whose driver value can fail to load.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Encrypted {
    Plain(String),
    Corrupt,
}

impl Valuer for Encrypted {
    fn value(&self) -> Result<Option<Value>, ValuerError> {
        match self {
            Encrypted::Plain(text) => Ok(Some(Value::from(text.as_str()))),
            Encrypted::Corrupt => Err(ValuerError::Invalid("bad ciphertext".into())),
        }
    }
}

impl Inspect for Encrypted {
    fn inspect_field(&self) -> Inspected<'_> {
        Inspected::Opaque { zero: false }
    }

    fn is_zero(&self) -> bool {
        false
    }
}

#[derive(Validatable)]
struct Secret {
    #[validate(required, min = 4)]
    token: Encrypted,
}

fn always_present(_: &dyn Any) -> Option<Value> {
    Some(Value::from("present"))
}

#[test]
fn registration_is_queryable() {
    let mut validator = Validator::new();
    assert_eq!(validator.custom_type_count(), 0);

    assert!(validator.register_valuer::<NullString>().is_none());
    assert!(validator.register_valuer::<NullInt64>().is_none());

    assert_eq!(validator.custom_type_count(), 2);
    assert!(validator.has_custom_type::<NullString>());
    assert!(!validator.has_custom_type::<NullBool>());
}

#[test]
fn last_registration_wins() {
    let mut validator = Validator::new().with_valuer::<NullString>();
    let input = Named {
        name: stale("Hello"),
    };
    assert!(validator.validate_struct(&input).is_err());

    let previous = validator.register_custom_type::<NullString>(always_present);

    assert!(previous.is_some());
    assert_eq!(validator.custom_type_count(), 1);
    assert!(validator.validate_struct(&input).is_ok());

    // The returned hook is the one that was replaced.
    let previous = previous.expect("previous hook");
    assert_eq!(previous(&stale("Hello")), None);
}

#[test]
fn custom_valuer_types() {
    let validator = Validator::new().with_valuer::<Encrypted>();

    let ok = Secret {
        token: Encrypted::Plain("hunter22".into()),
    };
    assert!(validator.validate_struct(&ok).is_ok());

    let short = Secret {
        token: Encrypted::Plain("abc".into()),
    };
    let errors = validator.validate_struct(&short).unwrap_err();
    assert_eq!(errors.errors()[0].code, "min");

    // A valuer error reads as absent, which `required` rejects.
    let corrupt = Secret {
        token: Encrypted::Corrupt,
    };
    let errors = validator.validate_struct(&corrupt).unwrap_err();
    assert_eq!(errors.errors()[0].code, "required");
}

#[test]
fn extract_valuer_ignores_other_types() {
    assert_eq!(extract_valuer::<NullString>(&42i64), None);
    assert_eq!(
        extract_valuer::<NullString>(&NullString::new("x".into())),
        Some(Value::from("x"))
    );
}

#[test]
fn validator_is_shared_across_threads() {
    let validator = crate::make_validator();
    let inputs: Vec<Named> = (0..8)
        .map(|i| Named {
            name: if i % 2 == 0 {
                NullString::new(format!("user-{i}"))
            } else {
                stale("stale")
            },
        })
        .collect();

    let validator = &validator;
    let failures = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || validator.validate_struct(input).is_err()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread panicked"))
            .filter(|failed| *failed)
            .count()
    });

    assert_eq!(failures, 4);
}
