//! EXPECT combinator - pins a check to an expected outcome
//!
//! Every flag option of the built-in rules is bidirectional: `true` asserts
//! the property, `false` asserts its negation. [`Expect`] carries that flag
//! alongside the inner check so the option value never turns into
//! "skip this check".
//!
//! # Examples
//!
//! ```
//! use nadir_validator::combinators::Expect;
//! use nadir_validator::foundation::Validate;
//! use nadir_validator::validators::not_blank;
//!
//! let must_be_blank = Expect::new(not_blank(), false);
//! assert!(must_be_blank.validate("   ").is_ok());
//! assert!(must_be_blank.validate("text").is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Passes iff the inner check's outcome equals `expected`.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expect<V> {
    /// The inner validator.
    pub(crate) inner: V,
    /// Outcome the inner validator must produce.
    pub(crate) expected: bool,
}

impl<V> Expect<V> {
    /// Creates a new `Expect` combinator.
    pub fn new(inner: V, expected: bool) -> Self {
        Self { inner, expected }
    }
}

impl<V> Validate for Expect<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match (self.inner.validate(input), self.expected) {
            (Ok(()), true) | (Err(_), false) => Ok(()),
            (Err(e), true) => Err(e),
            (Ok(()), false) => Err(ValidationError::new(
                "not_failed",
                "Validation should have failed but passed",
            )),
        }
    }
}
