#![allow(dead_code)]

use std::collections::HashMap;

use nullable_validator::{NullString, Validatable, Validator};

#[derive(Validatable)]
struct Reading {
    #[validate(gte = -3, lt = 2.5)]
    score: f64,
}

#[derive(Validatable)]
struct Record {
    #[validate(required, len = 4)]
    r#type: String,

    #[validate(required)]
    reading: Reading,

    #[validate(skip)]
    cache: HashMap<String, String>,

    #[validate(max = 18446744073709551615)]
    big: u64,

    #[validate(ne = -9223372036854775808)]
    small: i64,

    untagged: Option<NullString>,
}

fn main() {
    let mut record = Record {
        r#type: "user".into(),
        reading: Reading { score: 1.0 },
        cache: HashMap::new(),
        big: 5,
        small: 0,
        untagged: None,
    };
    let validator = Validator::new().with_valuer::<NullString>();
    assert!(validator.validate_struct(&record).is_ok());
    assert!(record.cache.is_empty());

    record.r#type = "bot".into();
    record.reading.score = -4.0;
    let errors = validator.validate_struct(&record).unwrap_err();
    assert_eq!(errors.fields(), vec!["type", "reading.score"]);
}
