//! Nullable wrapper fields seen through the `Valuer` hook.

use nullable_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{make_validator, stale};

#[derive(Validatable)]
struct RequiredName {
    #[validate(required)]
    name: NullString,
}

#[derive(Validatable)]
struct LongName {
    #[validate(required, gt = 10)]
    name: NullString,
}

#[derive(Validatable)]
struct OptionalAge {
    #[validate(omitempty, gte = 18, lte = 130)]
    age: NullInt64,
}

#[test]
fn stale_wrapper_fails_required() {
    let input = RequiredName {
        name: stale("Hello"),
    };

    let errors = make_validator().validate_struct(&input).unwrap_err();

    assert_eq!(errors.len(), 1);
    let error = &errors.errors()[0];
    assert_eq!(error.code, "required");
    assert_eq!(error.field.as_deref(), Some("name"));
}

#[rstest]
#[case::valid("Hello", true)]
#[case::valid_but_empty("", false)]
fn required_wrapper(#[case] value: &str, #[case] expected_ok: bool) {
    let input = RequiredName {
        name: NullString::new(value.to_owned()),
    };

    assert_eq!(
        make_validator().validate_struct(&input).is_ok(),
        expected_ok
    );
}

#[rstest]
#[case::absent(stale("hello world!"), Some("required"))]
#[case::too_short(NullString::new("hello".into()), Some("gt"))]
#[case::exactly_ten(NullString::new("0123456789".into()), Some("gt"))]
#[case::long_enough(NullString::new("hello world".into()), None)]
fn wrapper_length(#[case] name: NullString, #[case] expected_code: Option<&str>) {
    let input = LongName { name };

    let result = make_validator().validate_struct(&input);

    let code = result
        .err()
        .map(|errors| errors.errors()[0].code.to_string());
    assert_eq!(code.as_deref(), expected_code);
}

#[test]
fn length_error_carries_bound_and_actual() {
    let input = LongName {
        name: NullString::new("hello".into()),
    };

    let errors = make_validator().validate_struct(&input).unwrap_err();

    let error = errors.for_field("name").expect("error for name");
    assert_eq!(error.param("bound"), Some("10"));
    assert_eq!(error.param("actual"), Some("5"));
}

#[test]
fn unregistered_wrapper_is_an_opaque_struct() {
    let input = RequiredName {
        name: stale("Hello"),
    };

    // Without the hook, `{ "Hello", false }` is a non-zero struct.
    assert!(Validator::new().validate_struct(&input).is_ok());

    let fully_zero = RequiredName {
        name: NullString::null(),
    };
    assert!(Validator::new().validate_struct(&fully_zero).is_err());
}

#[rstest]
#[case::absent(NullInt64::null(), true)]
#[case::stale(NullInt64 { value: 5, valid: false }, true)]
#[case::zero(NullInt64::new(0), true)]
#[case::minor(NullInt64::new(17), false)]
#[case::adult(NullInt64::new(18), true)]
#[case::impossible(NullInt64::new(200), false)]
fn omitempty_wrapper(#[case] age: NullInt64, #[case] expected_ok: bool) {
    let input = OptionalAge { age };

    assert_eq!(
        make_validator().validate_struct(&input).is_ok(),
        expected_ok
    );
}

#[test]
fn wrapper_fields_are_not_modified() {
    let input = LongName {
        name: stale("Hello"),
    };

    let _ = make_validator().validate_struct(&input);

    assert_eq!(input.name, stale("Hello"));
}

#[test]
fn wrappers_deserialize_from_json_nulls() {
    #[derive(serde::Deserialize, Validatable)]
    struct Payload {
        #[validate(required)]
        name: NullString,
    }

    let payload: Payload = serde_json::from_str(r#"{ "name": null }"#).unwrap();
    assert!(make_validator().validate_struct(&payload).is_err());

    let payload: Payload = serde_json::from_str(r#"{ "name": "alice" }"#).unwrap();
    assert!(make_validator().validate_struct(&payload).is_ok());
}
