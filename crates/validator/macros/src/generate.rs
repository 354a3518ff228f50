//! Code generation for the Validatable derive

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, FieldsNamed};

use crate::parse::FieldAttrs;

/// Generates `Validatable` and `Inspect` impls for a struct.
///
/// Skipped fields are left out of both the field list and the zero check,
/// so their types need not implement `Inspect`.
pub(crate) fn generate_validatable(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let fields = require_named_struct(input)?;
    require_no_generics(input)?;

    let mut rule_consts = Vec::new();
    let mut field_refs = Vec::new();
    let mut zero_checks = Vec::new();

    for (index, field) in fields.named.iter().enumerate() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        let attrs = FieldAttrs::from_attributes(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let rules_ident = format_ident!("__RULES_{}", index);
        let rules = &attrs.rules;
        let field_name = ident.unraw().to_string();

        rule_consts.push(quote! {
            const #rules_ident: &[::nullable_validator::Rule] = &[#(#rules),*];
        });
        field_refs.push(quote! {
            ::nullable_validator::FieldRef::new(#field_name, #rules_ident, &self.#ident)
        });
        zero_checks.push(quote! {
            ::nullable_validator::Inspect::is_zero(&self.#ident)
        });
    }

    let is_zero = match zero_checks.split_first() {
        Some((first, rest)) => quote!(#first #(&& #rest)*),
        None => quote!(true),
    };

    Ok(quote! {
        #[automatically_derived]
        impl ::nullable_validator::Validatable for #name {
            fn fields(&self) -> ::std::vec::Vec<::nullable_validator::FieldRef<'_>> {
                #(#rule_consts)*
                ::std::vec![#(#field_refs),*]
            }
        }

        #[automatically_derived]
        impl ::nullable_validator::Inspect for #name {
            fn inspect_field(&self) -> ::nullable_validator::Inspected<'_> {
                ::nullable_validator::Inspected::Struct(self)
            }

            fn is_zero(&self) -> bool {
                #is_zero
            }
        }
    })
}

/// Validate that input is a struct with named fields.
fn require_named_struct(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                input,
                "Validatable requires named fields; tuple structs are not supported",
            )),
            Fields::Unit => Err(syn::Error::new_spanned(
                input,
                "Validatable cannot be derived for unit structs, they have no fields to validate",
            )),
        },
        Data::Enum(_) => Err(syn::Error::new_spanned(
            input,
            "Validatable can only be derived for structs",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            "Validatable cannot be derived for unions",
        )),
    }
}

/// Field types are looked up by `TypeId`, so the struct must be `'static`.
fn require_no_generics(input: &DeriveInput) -> syn::Result<()> {
    if input.generics.params.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &input.generics,
            "Validatable cannot be derived for generic structs; implement `Validatable` and `Inspect` by hand",
        ))
    }
}
