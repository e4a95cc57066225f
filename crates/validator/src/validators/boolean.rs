//! Boolean validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a boolean value is `true`.
    pub IsTrue for bool;
    rule(input) { *input }
    error(input) { ValidationError::new("is_true", "Value must be true") }
    fn is_true();
}
