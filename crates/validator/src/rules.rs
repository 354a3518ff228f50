//! The rule tag language
//!
//! Rules are declared per field, either through `#[validate(...)]` on a
//! derived struct or as a comma-separated tag string parsed at runtime:
//!
//! ```rust
//! use nullable_validator::{Number, Rule, parse_rules};
//!
//! let rules = parse_rules("required,gt=10").unwrap();
//! assert_eq!(rules, vec![Rule::Required, Rule::Gt(Number::Int(10))]);
//! ```
//!
//! | tag | parameter | meaning |
//! |---|---|---|
//! | `required` | | present and not the zero value |
//! | `omitempty` | | skip the other rules when absent or zero |
//! | `len` | N | length (or value) equals N |
//! | `min` / `max` | N | length (or value) at least / at most N |
//! | `eq` / `ne` | N | length (or value) equals / differs from N |
//! | `gt` / `gte` | N | length (or value) greater than / at least N |
//! | `lt` / `lte` | N | length (or value) less than / at most N |

use std::fmt;

use crate::foundation::{Number, RuleParseError, Validate, ValidationError};
use crate::validators::{
    equal_to, exact_length, greater_or_equal, greater_than, less_or_equal, less_than, max, min,
    not_equal_to,
};

/// One declarative constraint on a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// The value must be present and non-zero.
    Required,
    /// Skip the remaining rules when the value is absent or zero.
    OmitEmpty,
    /// Length or value equals the parameter.
    Len(Number),
    /// Length or value is at least the parameter.
    Min(Number),
    /// Length or value is at most the parameter.
    Max(Number),
    /// Length or value equals the parameter.
    Eq(Number),
    /// Length or value differs from the parameter.
    Ne(Number),
    /// Length or value is strictly greater than the parameter.
    Gt(Number),
    /// Length or value is greater than or equal to the parameter.
    Gte(Number),
    /// Length or value is strictly less than the parameter.
    Lt(Number),
    /// Length or value is less than or equal to the parameter.
    Lte(Number),
}

impl Rule {
    /// The rule's tag, as written in a tag string and reported as error code.
    pub fn tag(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::OmitEmpty => "omitempty",
            Rule::Len(_) => "len",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::Eq(_) => "eq",
            Rule::Ne(_) => "ne",
            Rule::Gt(_) => "gt",
            Rule::Gte(_) => "gte",
            Rule::Lt(_) => "lt",
            Rule::Lte(_) => "lte",
        }
    }

    /// The numeric parameter of a comparison rule.
    pub fn param(&self) -> Option<Number> {
        match *self {
            Rule::Required | Rule::OmitEmpty => None,
            Rule::Len(n)
            | Rule::Min(n)
            | Rule::Max(n)
            | Rule::Eq(n)
            | Rule::Ne(n)
            | Rule::Gt(n)
            | Rule::Gte(n)
            | Rule::Lt(n)
            | Rule::Lte(n) => Some(n),
        }
    }

    /// Applies a comparison rule to a measured value.
    ///
    /// `required` and `omitempty` are about presence, not magnitude, and
    /// always pass here.
    pub fn compare(&self, measure: Number) -> Result<(), ValidationError> {
        match *self {
            Rule::Required | Rule::OmitEmpty => Ok(()),
            Rule::Len(n) => exact_length(n).validate(&measure),
            Rule::Min(n) => min(n).validate(&measure),
            Rule::Max(n) => max(n).validate(&measure),
            Rule::Eq(n) => equal_to(n).validate(&measure),
            Rule::Ne(n) => not_equal_to(n).validate(&measure),
            Rule::Gt(n) => greater_than(n).validate(&measure),
            Rule::Gte(n) => greater_or_equal(n).validate(&measure),
            Rule::Lt(n) => less_than(n).validate(&measure),
            Rule::Lte(n) => less_or_equal(n).validate(&measure),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.param() {
            Some(param) => write!(f, "{}={param}", self.tag()),
            None => f.write_str(self.tag()),
        }
    }
}

/// Parses a comma-separated tag string such as `"required,gt=10"`.
///
/// An empty (or all-whitespace) string yields no rules.
pub fn parse_rules(tag: &str) -> Result<Vec<Rule>, RuleParseError> {
    if tag.trim().is_empty() {
        return Ok(Vec::new());
    }

    tag.split(',')
        .enumerate()
        .map(|(position, part)| parse_rule(position, part.trim()))
        .collect()
}

fn parse_rule(position: usize, part: &str) -> Result<Rule, RuleParseError> {
    if part.is_empty() {
        return Err(RuleParseError::EmptyRule(position));
    }

    let (name, param) = match part.split_once('=') {
        Some((name, param)) => (name.trim(), Some(param.trim())),
        None => (part, None),
    };

    let comparison: fn(Number) -> Rule = match name {
        "required" | "omitempty" => {
            let rule = if name == "required" {
                Rule::Required
            } else {
                Rule::OmitEmpty
            };
            return match param {
                None => Ok(rule),
                Some(_) => Err(RuleParseError::UnexpectedParam(rule.tag())),
            };
        }
        "len" => Rule::Len,
        "min" => Rule::Min,
        "max" => Rule::Max,
        "eq" => Rule::Eq,
        "ne" => Rule::Ne,
        "gt" => Rule::Gt,
        "gte" => Rule::Gte,
        "lt" => Rule::Lt,
        "lte" => Rule::Lte,
        other => return Err(RuleParseError::UnknownRule(other.to_owned())),
    };

    // The tag is only known as `&'static str` through the constructed rule.
    let tag = comparison(Number::Int(0)).tag();
    let param = match param {
        Some(param) if !param.is_empty() => param,
        _ => return Err(RuleParseError::MissingParam(tag)),
    };
    let number = param
        .parse::<Number>()
        .map_err(|_| RuleParseError::InvalidParam {
            rule: tag,
            param: param.to_owned(),
        })?;

    Ok(comparison(number))
}
