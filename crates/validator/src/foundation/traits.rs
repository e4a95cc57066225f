//! Core traits for leaf checks
//!
//! This module defines the trait every leaf check implements, plus the
//! extension trait providing the combinators the built-in rules compose
//! their option checks with.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all leaf checks implement.
///
/// Generic over the input type so a check for `str` can never be handed a
/// number by mistake.
///
/// # Examples
///
/// ```
/// use nadir_validator::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", "Value must be even"))
///         }
///     }
/// }
///
/// assert!(Even.validate(&4).is_ok());
/// assert!(Even.validate(&3).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for leaf checks.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Requires the check to produce `expected`.
    ///
    /// With `true` this is the check itself; with `false` the check must
    /// fail. This is how a flag option set to `false` asserts the negation.
    ///
    /// # Examples
    ///
    /// ```
    /// use nadir_validator::foundation::{Validate, ValidateExt};
    /// use nadir_validator::validators::is_true;
    ///
    /// assert!(is_true().expect(false).validate(&false).is_ok());
    /// assert!(is_true().expect(false).validate(&true).is_err());
    /// ```
    fn expect(self, expected: bool) -> Expect<Self> {
        Expect::new(self, expected)
    }

    /// Inverts the check. Shorthand for `expect(false)`.
    fn not(self) -> Expect<Self> {
        Expect::new(self, false)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::expect::Expect;

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
    }

    #[test]
    fn test_boxed_validator_delegates() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysValid);
        assert!(boxed.validate("test").is_ok());
    }

    #[test]
    fn test_not_inverts() {
        assert!(AlwaysValid.not().validate("test").is_err());
    }
}
