//! Plain (non-wrapper) fields: strings, numbers, booleans, options.

use nullable_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::make_validator;

#[derive(Validatable)]
struct RequestBody {
    #[validate(required, gt = 10)]
    name: String,
}

#[derive(Validatable)]
struct Product {
    #[validate(required, min = 3, max = 20)]
    title: String,

    #[validate(gte = 0.5, lt = 1000)]
    price: f64,

    #[validate(ne = -1)]
    stock: i32,

    #[validate(required)]
    published: bool,

    #[validate(omitempty, len = 8)]
    sku: Option<String>,

    #[validate(skip)]
    #[allow(dead_code)]
    notes: Vec<String>,
}

fn product() -> Product {
    Product {
        title: "Desk lamp".into(),
        price: 24.5,
        stock: 3,
        published: true,
        sku: None,
        notes: vec!["internal".into()],
    }
}

#[rstest]
#[case::empty("", Some("required"))]
#[case::short("short", Some("gt"))]
#[case::ten_chars("abcdefghij", Some("gt"))]
#[case::eleven_chars("abcdefghijk", None)]
#[case::multibyte("\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}", Some("gt"))]
fn simple_struct(#[case] name: &str, #[case] expected_code: Option<&str>) {
    let body = RequestBody {
        name: name.to_owned(),
    };

    let code = make_validator()
        .validate_struct(&body)
        .err()
        .map(|errors| errors.errors()[0].code.to_string());

    assert_eq!(code.as_deref(), expected_code);
}

#[test]
fn valid_product_passes() {
    assert!(make_validator().validate_struct(&product()).is_ok());
}

#[test]
fn every_failing_field_is_reported_in_order() {
    let input = Product {
        title: "TV".into(),
        price: 0.1,
        stock: -1,
        published: false,
        sku: Some("ABC".into()),
        ..product()
    };

    let errors = make_validator().validate_struct(&input).unwrap_err();

    assert_eq!(
        errors.fields(),
        vec!["title", "price", "stock", "published", "sku"]
    );
    let codes: Vec<_> = errors.iter().map(|error| error.code.as_ref()).collect();
    assert_eq!(codes, vec!["min", "gte", "ne", "required", "len"]);
}

#[test]
fn first_failing_rule_stops_the_field() {
    let input = Product {
        title: String::new(),
        ..product()
    };

    let errors = make_validator().validate_struct(&input).unwrap_err();

    // `min` would also fail, but `required` comes first.
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].code, "required");
}

#[rstest]
#[case::none(None, true)]
#[case::set_but_empty(Some(String::new()), false)]
#[case::exact(Some("ABCD1234".to_owned()), true)]
#[case::wrong(Some("ABCD".to_owned()), false)]
fn optional_field(#[case] sku: Option<String>, #[case] expected_ok: bool) {
    let input = Product { sku, ..product() };

    assert_eq!(
        make_validator().validate_struct(&input).is_ok(),
        expected_ok
    );
}

#[derive(Validatable)]
struct Profile {
    #[validate(required)]
    nickname: Option<String>,

    #[validate(required, omitempty, min = 3)]
    bio: String,
}

#[rstest]
#[case::unset(None, Some("nickname"))]
#[case::set_but_empty(Some(String::new()), None)]
#[case::set(Some("ada".to_owned()), None)]
fn required_option_checks_presence_only(
    #[case] nickname: Option<String>,
    #[case] failing_field: Option<&str>,
) {
    let input = Profile {
        nickname,
        bio: "Mathematician".into(),
    };

    let errors = make_validator().validate_struct(&input).err();

    assert_eq!(
        errors.as_ref().map(ValidationErrors::fields),
        failing_field.map(|field| vec![field])
    );
}

#[rstest]
#[case::empty("", Some("required"))]
#[case::too_short("ab", Some("min"))]
#[case::long_enough("abc", None)]
fn rules_before_omitempty_still_apply(#[case] bio: &str, #[case] expected_code: Option<&str>) {
    let input = Profile {
        nickname: Some("ada".into()),
        bio: bio.to_owned(),
    };

    let code = make_validator()
        .validate_struct(&input)
        .err()
        .map(|errors| errors.errors()[0].code.to_string());

    assert_eq!(code.as_deref(), expected_code);
}

#[test]
fn error_display_lists_every_failure() {
    let input = Product {
        title: "TV".into(),
        published: false,
        ..product()
    };

    let errors = make_validator().validate_struct(&input).unwrap_err();
    let display = errors.to_string();

    assert!(display.starts_with("Validation failed with 2 error(s):"));
    assert!(display.contains("1. [title] min"));
    assert!(display.contains("2. [published] required"));
}

#[test]
fn validate_var_with_parsed_rules() {
    let validator = make_validator();
    let rules = parse_rules("required,gt=10").unwrap();

    assert!(validator.validate_var(&"short".to_owned(), &rules).is_err());
    assert!(
        validator
            .validate_var(&"long enough text".to_owned(), &rules)
            .is_ok()
    );
    assert!(validator.validate_var(&42u32, &parse_rules("lte=42").unwrap()).is_ok());
}
