//! Procedural macros for nullable-validator
//!
//! - **`#[derive(Validatable)]`** - exposes a struct's fields and their
//!   `#[validate(...)]` rules to the validator

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod generate;
mod parse;

/// Derives `Validatable` and `Inspect` for a struct with named fields.
///
/// # Attributes
///
/// - `#[validate(required)]` - present and not the zero value
/// - `#[validate(omitempty)]` - skip the other rules when absent or zero
/// - `#[validate(len = N)]` - length (or value) equals N
/// - `#[validate(min = N)]`, `#[validate(max = N)]`
/// - `#[validate(eq = N)]`, `#[validate(ne = N)]`
/// - `#[validate(gt = N)]`, `#[validate(gte = N)]`
/// - `#[validate(lt = N)]`, `#[validate(lte = N)]`
/// - `#[validate(skip)]` - leave the field out entirely
///
/// `N` is an integer or float literal, optionally negative. Rules run in the
/// order written. Fields without attributes are still listed, so nested
/// structs are walked.
///
/// # Examples
///
/// ```rust,ignore
/// use nullable_validator::prelude::*;
///
/// #[derive(Validatable)]
/// struct Signup {
///     #[validate(required, gt = 10)]
///     name: NullString,
///
///     #[validate(omitempty, gte = 18)]
///     age: NullInt64,
/// }
/// ```
#[proc_macro_derive(Validatable, attributes(validate))]
pub fn derive_validatable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate::generate_validatable(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
