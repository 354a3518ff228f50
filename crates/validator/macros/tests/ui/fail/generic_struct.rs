#![allow(dead_code)]

use nullable_validator::Validatable;

#[derive(Validatable)]
struct Wrapper<T> {
    value: T,
}

fn main() {}
