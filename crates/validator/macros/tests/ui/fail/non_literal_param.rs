#![allow(dead_code)]

use nullable_validator::Validatable;

#[derive(Validatable)]
struct Signup {
    #[validate(gt = limit)]
    name: String,
}

fn main() {}
