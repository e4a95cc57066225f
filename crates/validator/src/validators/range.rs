//! Numeric range validators
//!
//! Used for `value.min/max/equal` on numbers and `length.min/max/equal` on
//! strings and collections (the length is measured first, then compared).

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(value: T);
}

crate::validator! {
    /// Validates that a value equals an expected value.
    #[derive(Copy, PartialEq)]
    pub EqualTo<T: PartialOrd + Display + Copy> { expected: T } for T;
    rule(self, input) { *input == self.expected }
    error(self, input) {
        ValidationError::new("equal", format!("Value must equal {}", self.expected))
            .with_param("expected", self.expected.to_string())
            .with_param("actual", input.to_string())
    }
    fn equal_to(expected: T);
}
