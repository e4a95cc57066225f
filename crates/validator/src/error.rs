//! Error types of the rule engine
//!
//! Two families: [`PathError`] stays inside the path accessor and the rules
//! (an unresolvable path means "field absent"), while [`ValidatorError`]
//! reports programmer and configuration mistakes to the caller. Data
//! failures are never errors; they are collected as messages.

use thiserror::Error;

/// Failure to resolve a dotted path against a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A segment does not exist (or holds `null`).
    #[error("undefined index '{segment}' in path '{path}'")]
    NotFound {
        /// The full path being resolved.
        path: String,
        /// The segment that was missing.
        segment: String,
    },

    /// An intermediate segment holds a value that cannot be descended into.
    #[error("element '{segment}' in path '{path}' is not a mapping")]
    NotAMapping {
        /// The full path being resolved.
        path: String,
        /// The segment whose value is a scalar.
        segment: String,
    },
}

/// Misuse of the validator by its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    /// An item names a rule that was never registered. Aborts the run.
    #[error("undefined rule name '{0}'")]
    UnknownRule(String),

    /// An item is malformed. Reported when the item is added.
    #[error("invalid validation item: {0}")]
    InvalidItemSpec(String),

    /// `is_valid` or `errors` was called before `run`.
    #[error("the validation wasn't run")]
    NotYetRun,

    /// The run was aborted by an unknown rule, so no result exists.
    #[error("the validation was aborted by undefined rule '{rule}'")]
    RunAborted {
        /// The rule name that aborted the run.
        rule: String,
    },
}

impl ValidatorError {
    pub(crate) fn invalid_item(reason: impl Into<String>) -> Self {
        Self::InvalidItemSpec(reason.into())
    }
}

/// Result alias for validator operations.
pub type ValidatorResult<T> = Result<T, ValidatorError>;
