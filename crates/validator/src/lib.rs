//! # nadir-validator
//!
//! Rule-based validation of nested data trees. Fields are addressed by
//! dotted paths (`"user.address.city"`), rules are named predicates, and a
//! run collects one human-readable message per failing field.
//!
//! ## Quick Start
//!
//! ```
//! use nadir_validator::prelude::*;
//! use serde_json::json;
//!
//! let mut validator = Validator::new(json!({"name": "Al", "tags": ["a"]}));
//! validator
//!     .add_item(ValidationItem::new("name", "string").with_options(json!({"length": {"min": 3}}))?)?
//!     .add_item(ValidationItem::new("tags", "array").with_options(json!({"assoc": false}))?)?;
//! validator.run()?;
//!
//! assert_eq!(
//!     validator.errors()?,
//!     ["Invalid string field 'name' value. Validation options: length"]
//! );
//! # Ok::<(), ValidatorError>(())
//! ```
//!
//! ## Rules
//!
//! The built-ins are `required`, `string`, `number`, `array` and `boolean`
//! (see [`rules`]). Custom rules are registered with
//! [`Validator::add_rule`].
//!
//! ## Leaf checks
//!
//! Rules turn their options into [`Validate`](foundation::Validate) checks
//! from [`validators`], pinned with [`expect`](foundation::ValidateExt::expect).
//! New leaf checks are declared with the [`validator!`] macro.

// ValidationError is returned by value from every leaf check.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod error;
pub mod foundation;
pub mod item;
mod macros;
pub mod options;
pub mod path;
pub mod prelude;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod validator;
pub mod validators;

pub use error::{PathError, ValidatorError, ValidatorResult};
pub use item::{FieldSpec, ValidationItem};
pub use options::RuleOptions;
pub use registry::RuleRegistry;
pub use rule::{Rule, RuleMessage};
pub use validator::Validator;
