#![allow(dead_code)]

use nullable_validator::Validatable;

#[derive(Validatable)]
struct Signup {
    #[validate(required, gt)]
    name: String,
}

fn main() {}
