//! Numeric property validators

use crate::foundation::ValidationError;
use crate::validators::Numeric;

crate::validator! {
    /// Validates that a number is strictly greater than zero.
    pub Positive for Numeric;
    rule(input) { *input > Numeric::Int(0) }
    error(input) {
        ValidationError::new("positive", "Value must be positive")
            .with_param("actual", input.to_string())
    }
    fn positive();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};

    #[test]
    fn test_positive() {
        assert!(positive().validate(&Numeric::Int(1)).is_ok());
        assert!(positive().validate(&Numeric::Float(0.5)).is_ok());
        assert!(positive().validate(&Numeric::Int(0)).is_err());
        assert!(positive().validate(&Numeric::Float(-1.0)).is_err());
    }

    #[test]
    fn test_non_positive_includes_zero() {
        let v = positive().expect(false);
        assert!(v.validate(&Numeric::Float(0.0)).is_ok());
        assert!(v.validate(&Numeric::Int(-1)).is_ok());
        assert!(v.validate(&Numeric::Int(1)).is_err());
    }
}
