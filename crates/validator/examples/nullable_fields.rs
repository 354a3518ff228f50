//! Validating nullable columns with and without the extraction hook

use nullable_validator::prelude::*;

#[derive(Validatable)]
struct Signup {
    #[validate(required, gt = 10)]
    name: NullString,

    #[validate(omitempty, gte = 18)]
    age: NullInt64,
}

fn report(label: &str, validator: &Validator, input: &Signup) {
    match validator.validate_struct(input) {
        Ok(()) => println!("✓ {label}: valid"),
        Err(errors) => {
            println!("✗ {label}:");
            for error in &errors {
                println!("    {error}");
            }
        }
    }
}

fn main() {
    let stale = Signup {
        name: NullString {
            value: "Hello".into(),
            valid: false,
        },
        age: NullInt64::null(),
    };
    let short = Signup {
        name: NullString::new("hello".into()),
        age: NullInt64::new(16),
    };
    let good = Signup {
        name: NullString::new("hello world".into()),
        age: NullInt64::new(30),
    };

    let plain = Validator::new();
    let hooked = Validator::new()
        .with_valuer::<NullString>()
        .with_valuer::<NullInt64>();

    println!("Without hooks, wrappers are opaque structs:");
    report("stale name", &plain, &stale);

    println!("\nWith the Valuer hook registered:");
    report("stale name", &hooked, &stale);
    report("short name, minor", &hooked, &short);
    report("good", &hooked, &good);
}
