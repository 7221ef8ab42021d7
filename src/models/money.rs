//! Money pairs a numeric amount with the currency code it is denominated in.
//! It is the value type domain models carry for prices: one per catalog item,
//! discarded with the item that owns it.

use crate::{
    catalog,
    error::{Error, Result},
    formatter,
    models::currency::Currency,
};
use getset::Getters;
use rust_decimal::prelude::*;
use std::fmt;

/// An immutable amount + currency code pair.
///
/// The only construction-time invariant is that the currency code must not be
/// blank. A blank code is a caller defect, so construction fails fast rather
/// than carrying the bad value into the presentation layer. Codes that simply
/// aren't in the catalog are fine here; formatting degrades gracefully for
/// those.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
#[getset(get = "pub")]
pub struct Money {
    /// The numeric amount.
    amount: Decimal,
    /// The 3-letter code of the currency the amount is denominated in.
    currency_code: String,
}

impl Money {
    /// Create a new `Money`.
    pub fn new<T: Into<String>>(amount: Decimal, currency_code: T) -> Result<Self> {
        let currency_code = currency_code.into();
        if currency_code.trim().is_empty() {
            Err(Error::BlankCurrencyCode)?;
        }
        Ok(Self {
            amount,
            currency_code,
        })
    }

    /// Create a `Money` from a float amount, the form prices arrive in from
    /// the upstream catalog API. Non-finite amounts cannot become prices.
    pub fn from_f64<T: Into<String>>(amount: f64, currency_code: T) -> Result<Self> {
        let amount = Decimal::from_f64(amount).ok_or(Error::InvalidAmount)?;
        Self::new(amount, currency_code)
    }

    /// Look up the full catalog record for this money's currency, if the
    /// catalog knows the code.
    pub fn currency(&self) -> Option<&'static Currency> {
        catalog::get_by_code(&self.currency_code)
    }

    /// Render this amount as a display string with the currency symbol.
    pub fn format(&self) -> String {
        formatter::format(self.amount, &self.currency_code)
    }

    /// Render with explicit control over the symbol and the code suffix.
    pub fn format_with(&self, show_symbol: bool, show_code: bool) -> String {
        formatter::format_with(self.amount, &self.currency_code, show_symbol, show_code)
    }

    /// Add another `Money` of the same currency.
    pub fn checked_add(&self, other: &Money) -> Result<Money> {
        self.check_same_currency(other)?;
        Ok(Self {
            amount: self.amount + other.amount,
            currency_code: self.currency_code.clone(),
        })
    }

    /// Subtract another `Money` of the same currency.
    pub fn checked_sub(&self, other: &Money) -> Result<Money> {
        self.check_same_currency(other)?;
        Ok(Self {
            amount: self.amount - other.amount,
            currency_code: self.currency_code.clone(),
        })
    }

    fn check_same_currency(&self, other: &Money) -> Result<()> {
        if !self.currency_code.eq_ignore_ascii_case(&other.currency_code) {
            Err(Error::CurrencyMismatch {
                left: self.currency_code.clone(),
                right: other.currency_code.clone(),
            })?;
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
