//! Error/Result types for the crate.
//!
//! Unknown currency or country codes are never errors here. Lookups return an
//! absent result and the formatter degrades to a fallback rendering, so the
//! presentation layer always has something to show. The errors below mark
//! caller defects caught at construction or arithmetic time.

use thiserror::Error;

/// An error type for when working with prices goes awry.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A `Money` was constructed with a blank currency code
    #[error("currency code cannot be blank")]
    BlankCurrencyCode,
    /// A price amount was not representable as a finite number
    #[error("price amount is not a finite number")]
    InvalidAmount,
    /// Arithmetic was attempted between two different currencies
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        left: String,
        right: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
