#![allow(dead_code)]

use nullable_validator::Validatable;

#[derive(Validatable)]
enum Status { Active, Inactive }

fn main() {}
