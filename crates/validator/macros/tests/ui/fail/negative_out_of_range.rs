#![allow(dead_code)]

use nullable_validator::Validatable;

#[derive(Validatable)]
struct Reading {
    #[validate(gt = -9223372036854775809)]
    value: i64,
}

fn main() {}
