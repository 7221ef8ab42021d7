//! A set of utility structs and functions used when operating the crate.

#[macro_use]
pub mod number;
