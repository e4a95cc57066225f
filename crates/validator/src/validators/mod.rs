//! Built-in leaf checks
//!
//! The building blocks the built-in rules turn their options into.
//!
//! # Categories
//!
//! - **Kind**: string, numeric, float, integer, boolean, collection, assoc
//! - **String**: not blank, full regex match
//! - **Numeric**: min, max, equal, positive
//! - **Boolean**: is true

pub mod boolean;
pub mod kind;
pub mod properties;
pub mod range;
pub mod text;

pub use boolean::{IsTrue, is_true};
pub use kind::{
    IsAssoc, IsBool, IsCollection, IsFloat, IsInteger, IsNumeric, IsString, Numeric, collection_len,
    is_assoc, is_bool, is_collection, is_float, is_integer, is_integer_key, is_numeric,
    is_string, kind_name, numeric_value,
};
pub use properties::{Positive, positive};
pub use range::{EqualTo, Max, Min, equal_to, max, min};
pub use text::{FullMatch, NotBlank, full_match, not_blank};
