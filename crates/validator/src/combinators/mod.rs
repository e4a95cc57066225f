//! Combinators for composing leaf checks

pub mod expect;

pub use expect::Expect;
