#![allow(dead_code)]

use nullable_validator::Validatable;

#[derive(Validatable)]
union Bits { int: u32, float: f32 }

fn main() {}
