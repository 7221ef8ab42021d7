//! The currency module holds the Currency model, the canonical metadata for
//! each currency the storefront catalog can price items in.

use getset::Getters;

/// Canonical metadata for a single currency: its ISO 4217 code, the symbol
/// rendered next to prices, a human-readable name, and how many decimal
/// places the currency conventionally displays.
///
/// Currencies are built once by the catalog at startup and never mutated, so
/// handing out shared references across threads is fine.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
#[getset(get = "pub")]
pub struct Currency {
    /// The 3-letter ISO 4217 code, uppercased. Unique key in the catalog.
    code: String,
    /// The symbol shown alongside formatted amounts.
    symbol: String,
    /// The currency's display name.
    name: String,
    /// How many decimal places this currency uses.
    decimal_places: u8,
}

impl Currency {
    /// Create a new currency record. Registry-internal; the public surface
    /// hands out `&'static Currency` from the catalog instead.
    pub(crate) fn new(code: &str, symbol: &str, name: &str, decimal_places: u8) -> Self {
        Self {
            code: code.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimal_places,
        }
    }

    /// True if this currency renders without a fractional part (JPY, KRW, ...).
    pub fn is_zero_decimal(&self) -> bool {
        self.decimal_places == 0
    }
}
