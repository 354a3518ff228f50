//! Comparison checks behind `min`, `max`, `eq`, `ne`, `gt`, `gte`, `lt`, `lte`
//!
//! The engine feeds these a [`Number`](crate::Number): the length of a
//! string, or the value of a number. Error codes are the rule tags.

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(min: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(max: T);
}

crate::validator! {
    /// Validates that a value is strictly greater than a bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use nullable_validator::validators::greater_than;
    /// use nullable_validator::foundation::Validate;
    ///
    /// let validator = greater_than(5);
    /// assert!(validator.validate(&6).is_ok());
    /// assert!(validator.validate(&5).is_err()); // Not strictly greater
    /// ```
    #[derive(Copy, PartialEq)]
    pub GreaterThan<T: PartialOrd + Display + Copy> { bound: T } for T;
    rule(self, input) { *input > self.bound }
    error(self, input) {
        ValidationError::new("gt", format!("Must be greater than {}", self.bound))
            .with_param("bound", self.bound.to_string())
            .with_param("actual", input.to_string())
    }
    fn greater_than(bound: T);
}

crate::validator! {
    /// Validates that a value is greater than or equal to a bound.
    #[derive(Copy, PartialEq)]
    pub GreaterOrEqual<T: PartialOrd + Display + Copy> { bound: T } for T;
    rule(self, input) { *input >= self.bound }
    error(self, input) {
        ValidationError::new("gte", format!("Must be at least {}", self.bound))
            .with_param("bound", self.bound.to_string())
            .with_param("actual", input.to_string())
    }
    fn greater_or_equal(bound: T);
}

crate::validator! {
    /// Validates that a value is strictly less than a bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use nullable_validator::validators::less_than;
    /// use nullable_validator::foundation::Validate;
    ///
    /// let validator = less_than(10);
    /// assert!(validator.validate(&9).is_ok());
    /// assert!(validator.validate(&10).is_err()); // Not strictly less
    /// ```
    #[derive(Copy, PartialEq)]
    pub LessThan<T: PartialOrd + Display + Copy> { bound: T } for T;
    rule(self, input) { *input < self.bound }
    error(self, input) {
        ValidationError::new("lt", format!("Must be less than {}", self.bound))
            .with_param("bound", self.bound.to_string())
            .with_param("actual", input.to_string())
    }
    fn less_than(bound: T);
}

crate::validator! {
    /// Validates that a value is less than or equal to a bound.
    #[derive(Copy, PartialEq)]
    pub LessOrEqual<T: PartialOrd + Display + Copy> { bound: T } for T;
    rule(self, input) { *input <= self.bound }
    error(self, input) {
        ValidationError::new("lte", format!("Must be at most {}", self.bound))
            .with_param("bound", self.bound.to_string())
            .with_param("actual", input.to_string())
    }
    fn less_or_equal(bound: T);
}

crate::validator! {
    /// Validates that a value equals an expected value.
    #[derive(Copy, PartialEq)]
    pub EqualTo<T: PartialOrd + Display + Copy> { expected: T } for T;
    rule(self, input) { *input == self.expected }
    error(self, input) {
        ValidationError::new("eq", format!("Must equal {}", self.expected))
            .with_param("expected", self.expected.to_string())
            .with_param("actual", input.to_string())
    }
    fn equal_to(expected: T);
}

crate::validator! {
    /// Validates that a value differs from a forbidden value.
    #[derive(Copy, PartialEq)]
    pub NotEqualTo<T: PartialOrd + Display + Copy> { forbidden: T } for T;
    rule(self, input) { *input != self.forbidden }
    error(self, input) {
        ValidationError::new("ne", format!("Must not equal {}", self.forbidden))
            .with_param("forbidden", self.forbidden.to_string())
    }
    fn not_equal_to(forbidden: T);
}
