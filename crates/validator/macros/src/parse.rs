//! Parsing of #[validate(...)] attributes

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Lit, UnOp};

/// Validation attributes for a field.
#[derive(Debug, Default)]
pub(crate) struct FieldAttrs {
    /// `Rule` constructor expressions, in the order written.
    pub rules: Vec<TokenStream>,
    pub skip: bool,
}

impl FieldAttrs {
    /// Parse validation attributes from a list of attributes.
    pub(crate) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("validate") {
                continue;
            }

            attr.parse_nested_meta(|meta| result.parse_meta(&meta))?;
        }

        Ok(result)
    }

    fn parse_meta(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        let path = &meta.path;

        if path.is_ident("skip") {
            self.skip = true;
            return Ok(());
        }

        if path.is_ident("required") {
            self.rules.push(quote!(::nullable_validator::Rule::Required));
            return Ok(());
        }

        if path.is_ident("omitempty") {
            self.rules.push(quote!(::nullable_validator::Rule::OmitEmpty));
            return Ok(());
        }

        let variant = [
            ("len", "Len"),
            ("min", "Min"),
            ("max", "Max"),
            ("eq", "Eq"),
            ("ne", "Ne"),
            ("gt", "Gt"),
            ("gte", "Gte"),
            ("lt", "Lt"),
            ("lte", "Lte"),
        ]
        .into_iter()
        .find_map(|(tag, variant)| path.is_ident(tag).then_some(variant));

        if let Some(variant) = variant {
            let variant = syn::Ident::new(variant, proc_macro2::Span::call_site());
            let number = parse_number(meta)?;
            self.rules
                .push(quote!(::nullable_validator::Rule::#variant(#number)));
            return Ok(());
        }

        Err(meta.error(format!(
            "unknown validation attribute `{}`; supported: required, omitempty, \
             len, min, max, eq, ne, gt, gte, lt, lte, skip",
            path.get_ident()
                .map_or_else(|| "<path>".to_owned(), ToString::to_string)
        )))
    }
}

fn parse_number(meta: &ParseNestedMeta<'_>) -> syn::Result<TokenStream> {
    let expr: Expr = meta
        .value()
        .map_err(|_| meta.error("expected a numeric parameter, e.g. `gt = 10`"))?
        .parse()?;
    number_tokens(&expr, false)
}

/// Turns an integer or float literal, optionally negated, into a `Number`.
fn number_tokens(expr: &Expr, negative: bool) -> syn::Result<TokenStream> {
    match expr {
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) if !negative => number_tokens(inner, true),
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => {
            let magnitude: u64 = lit.base10_parse()?;
            if negative {
                if magnitude > i64::MIN.unsigned_abs() {
                    return Err(syn::Error::new_spanned(lit, "integer parameter out of range"));
                }
                let lit = Literal::u64_unsuffixed(magnitude);
                Ok(quote!(::nullable_validator::Number::Int(-#lit)))
            } else if i64::try_from(magnitude).is_ok() {
                let lit = Literal::u64_unsuffixed(magnitude);
                Ok(quote!(::nullable_validator::Number::Int(#lit)))
            } else {
                let lit = Literal::u64_unsuffixed(magnitude);
                Ok(quote!(::nullable_validator::Number::Uint(#lit)))
            }
        }
        Expr::Lit(ExprLit {
            lit: Lit::Float(lit), ..
        }) => {
            let magnitude: f64 = lit.base10_parse()?;
            if !magnitude.is_finite() {
                return Err(syn::Error::new_spanned(lit, "float parameter must be finite"));
            }
            let lit = Literal::f64_unsuffixed(magnitude);
            if negative {
                Ok(quote!(::nullable_validator::Number::Float(-#lit)))
            } else {
                Ok(quote!(::nullable_validator::Number::Float(#lit)))
            }
        }
        other => Err(syn::Error::new_spanned(
            other,
            "expected an integer or float literal",
        )),
    }
}
