//! Nested structs: dotted paths and required-struct checking.

use nullable_validator::prelude::*;
use pretty_assertions::assert_eq;

use crate::{make_validator, stale};

#[derive(Validatable)]
struct Address {
    #[validate(required)]
    city: NullString,

    #[validate(omitempty, len = 5)]
    zip: String,
}

#[derive(Validatable)]
struct Owner {
    #[validate(required, min = 2)]
    name: String,

    #[validate(required)]
    address: Address,
}

#[derive(Validatable)]
struct Account {
    #[validate(required)]
    owner: Owner,

    // No rules: still walked.
    billing: Address,

    #[validate(omitempty)]
    shipping: Option<Address>,
}

fn address(city: &str) -> Address {
    Address {
        city: NullString::new(city.to_owned()),
        zip: "10115".into(),
    }
}

fn account() -> Account {
    Account {
        owner: Owner {
            name: "Ada".into(),
            address: address("Berlin"),
        },
        billing: address("Hamburg"),
        shipping: None,
    }
}

#[test]
fn valid_account_passes() {
    assert!(make_validator().validate_struct(&account()).is_ok());
}

#[test]
fn nested_errors_use_dotted_paths() {
    let mut input = account();
    input.owner.address.city = stale("Berlin");
    input.billing.zip = "123".into();

    let errors = make_validator().validate_struct(&input).unwrap_err();

    assert_eq!(errors.fields(), vec!["owner.address.city", "billing.zip"]);
}

#[test]
fn zero_nested_struct_fails_required() {
    let mut input = account();
    input.owner.address = Address {
        city: NullString::null(),
        zip: String::new(),
    };

    let errors = make_validator().validate_struct(&input).unwrap_err();

    // The zero struct itself is reported; its fields are not walked.
    assert_eq!(errors.fields(), vec!["owner.address"]);
    assert_eq!(errors.errors()[0].code, "required");
}

#[test]
fn required_struct_can_be_disabled() {
    let config = ValidatorConfig::default().with_required_struct(false);
    let validator = Validator::with_config(config).with_valuer::<NullString>();

    let mut input = account();
    input.owner.address = Address {
        city: NullString::null(),
        zip: String::new(),
    };

    let errors = validator.validate_struct(&input).unwrap_err();

    assert_eq!(errors.fields(), vec!["owner.address.city"]);
}

#[test]
fn optional_nested_struct_is_walked_when_present() {
    let mut input = account();
    assert!(make_validator().validate_struct(&input).is_ok());

    input.shipping = Some(Address {
        city: stale("Paris"),
        zip: "75001".into(),
    });

    let errors = make_validator().validate_struct(&input).unwrap_err();
    assert_eq!(errors.fields(), vec!["shipping.city"]);
}
