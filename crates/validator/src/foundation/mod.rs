//! Leaf check types and traits
//!
//! The built-in rules are thin: each one resolves its field, checks the
//! value's kind, then turns its options into a list of leaf checks and runs
//! them all. This module holds the pieces those lists are built from:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! # Composition
//!
//! ```
//! use nadir_validator::foundation::{Validate, ValidateExt};
//! use nadir_validator::validators::{Numeric, positive};
//!
//! assert!(positive().validate(&Numeric::from(4.0)).is_ok());
//!
//! // Bidirectional: `expect(false)` asserts the negation.
//! let non_positive = positive().expect(false);
//! assert!(non_positive.validate(&Numeric::from(4.0)).is_err());
//! assert!(non_positive.validate(&Numeric::from(0.0)).is_ok());
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

/// A boxed leaf check over `I`.
pub type BoxedCheck<I> = Box<dyn Validate<Input = I> + Send + Sync>;

/// Runs every check against `value` and collects the failures.
///
/// All checks run, no short-circuit, so the trace log of a failing rule
/// names every option that did not hold.
///
/// # Examples
///
/// ```
/// use nadir_validator::foundation::{BoxedCheck, validate_with_all};
/// use nadir_validator::validators::{max, min};
///
/// let checks: Vec<BoxedCheck<f64>> = vec![Box::new(min(3.0)), Box::new(max(5.0))];
/// assert!(validate_with_all(&4.0, &checks).is_ok());
/// assert_eq!(validate_with_all(&9.0, &checks).unwrap_err().len(), 1);
/// ```
pub fn validate_with_all<I, V>(value: &I, validators: &[V]) -> Result<(), ValidationErrors>
where
    I: ?Sized,
    V: Validate<Input = I>,
{
    let errors: ValidationErrors = validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect();

    if errors.has_errors() {
        Err(errors)
    } else {
        Ok(())
    }
}
