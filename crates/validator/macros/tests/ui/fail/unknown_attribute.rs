#![allow(dead_code)]

use nullable_validator::Validatable;

#[derive(Validatable)]
struct Signup {
    #[validate(email)]
    name: String,
}

fn main() {}
