//! End-to-end tests of the validator against whole data trees.

mod properties;
mod scenarios;
