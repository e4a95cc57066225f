//! Prelude module for convenient imports.
//!
//! ```
//! use nadir_validator::prelude::*;
//! ```

// ============================================================================
// ENGINE: Validator, items, rules, errors
// ============================================================================

pub use crate::error::{PathError, ValidatorError, ValidatorResult};
pub use crate::item::{FieldSpec, ValidationItem};
pub use crate::options::RuleOptions;
pub use crate::path::{get_by_path, is_path_set};
pub use crate::registry::RuleRegistry;
pub use crate::rule::{Rule, RuleMessage, default_message};
pub use crate::validator::Validator;

// ============================================================================
// FOUNDATION: Leaf check traits and errors
// ============================================================================

pub use crate::foundation::{
    BoxedCheck, Validate, ValidateExt, ValidationError, ValidationErrors, validate_with_all,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::Expect;
