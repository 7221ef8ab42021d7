//! Renders price amounts as display strings.
//!
//! Formatting never fails. Codes the catalog doesn't know degrade to a
//! fallback rendering that uses the raw code as the symbol, so the
//! presentation layer always has a usable string regardless of what the
//! upstream API hands back.

use crate::{
    catalog,
    models::currency::Currency,
    util::number,
};
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::*;

/// Currencies whose symbol conventionally follows the amount.
const SYMBOL_AFTER: &[&str] = &["EUR", "CHF", "NOK", "SEK", "DKK", "CZK", "RON"];

/// Decimal places used when rendering a code the catalog doesn't know.
const FALLBACK_DECIMAL_PLACES: u8 = 2;

/// The result of resolving a currency code against the catalog.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedCurrency {
    /// The catalog knows the code.
    Resolved(&'static Currency),
    /// The catalog doesn't. Carries the uppercased raw code, which stands in
    /// for both symbol and name.
    Fallback(String),
}

impl ResolvedCurrency {
    /// The symbol rendered next to the amount.
    pub fn symbol(&self) -> &str {
        match self {
            ResolvedCurrency::Resolved(currency) => currency.symbol(),
            ResolvedCurrency::Fallback(code) => code.as_str(),
        }
    }

    /// The canonical (uppercased) currency code.
    pub fn code(&self) -> &str {
        match self {
            ResolvedCurrency::Resolved(currency) => currency.code(),
            ResolvedCurrency::Fallback(code) => code.as_str(),
        }
    }

    /// Decimal places the amount is rounded and padded to.
    pub fn decimal_places(&self) -> u8 {
        match self {
            ResolvedCurrency::Resolved(currency) => *currency.decimal_places(),
            ResolvedCurrency::Fallback(_) => FALLBACK_DECIMAL_PLACES,
        }
    }
}

/// Resolve a currency code against the catalog. Case-insensitive; unknown
/// codes come back as the fallback variant rather than an error.
pub fn resolve(code: &str) -> ResolvedCurrency {
    let code = code.trim().to_uppercase();
    match catalog::get_by_code(&code) {
        Some(currency) => ResolvedCurrency::Resolved(currency),
        None => ResolvedCurrency::Fallback(code),
    }
}

/// Format an amount in the given currency with its symbol.
pub fn format(amount: Decimal, code: &str) -> String {
    format_with(amount, code, true, false)
}

/// Format an amount in the given currency, choosing whether the symbol and
/// the trailing currency code appear.
pub fn format_with(amount: Decimal, code: &str, show_symbol: bool, show_code: bool) -> String {
    let resolved = resolve(code);
    let rendered = render_amount(amount, resolved.decimal_places());
    let mut out = if show_symbol {
        if SYMBOL_AFTER.contains(&resolved.code()) {
            format!("{} {}", rendered, resolved.symbol())
        } else {
            format!("{}{}", resolved.symbol(), rendered)
        }
    } else {
        rendered
    };
    if show_code {
        out.push(' ');
        out.push_str(resolved.code());
    }
    out
}

/// Round to the currency's precision (half-up, away from zero) and render
/// with comma thousands separators and a zero-padded fraction.
fn render_amount(amount: Decimal, decimal_places: u8) -> String {
    let mut rounded = amount.round_dp_with_strategy(
        decimal_places as u32,
        RoundingStrategy::MidpointAwayFromZero,
    );
    // round_dp only ever drops scale; pad back up so "5" renders as "5.00".
    rounded.rescale(decimal_places as u32);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (digits.as_str(), ""),
    };
    let grouped = number::group_digits(int_part);
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_basic_prices() {
        assert_eq!(format(dec!(12.99), "USD"), "$12.99");
        assert_eq!(format(dec!(9.99), "GBP"), "£9.99");
        assert_eq!(format(dec!(0), "USD"), "$0.00");
        assert_eq!(format(dec!(5), "USD"), "$5.00");
    }

    #[test]
    fn rounds_half_up_at_currency_precision() {
        assert_eq!(format(dec!(12.996), "USD"), "$13.00");
        assert_eq!(format(dec!(12.994), "USD"), "$12.99");
        assert_eq!(format(dec!(12.995), "USD"), "$13.00");
        assert_eq!(format(dec!(1250.7), "JPY"), "¥1,251");
        assert_eq!(format(dec!(1250.4), "JPY"), "¥1,250");
        assert_eq!(format(dec!(1250.5), "JPY"), "¥1,251");
        // Re-formatting an already-rounded amount changes nothing.
        assert_eq!(format(dec!(13.00), "USD"), "$13.00");
        assert_eq!(format(dec!(1251), "JPY"), "¥1,251");
    }

    #[test]
    fn output_precision_matches_the_catalog() {
        for currency in crate::catalog::all() {
            let rendered = format_with(dec!(4.2), currency.code(), false, false);
            match *currency.decimal_places() {
                0 => assert!(!rendered.contains('.'), "{} should have no fraction", currency.code()),
                places => {
                    let frac = rendered.split('.').nth(1).unwrap();
                    assert_eq!(frac.len(), places as usize, "{}", currency.code());
                }
            }
        }
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format(dec!(1234567.89), "USD"), "$1,234,567.89");
        assert_eq!(format(dec!(1000), "JPY"), "¥1,000");
        assert_eq!(format(dec!(999.99), "USD"), "$999.99");
        assert_eq!(format(dec!(1000000), "USD"), "$1,000,000.00");
    }

    #[test]
    fn zero_decimal_currencies_render_without_fraction() {
        assert_eq!(format(dec!(1250), "JPY"), "¥1,250");
        assert_eq!(format(dec!(15000), "KRW"), "₩15,000");
        assert_eq!(format(dec!(25000.49), "IDR"), "Rp25,000");
    }

    #[test]
    fn symbol_follows_amount_for_suffix_currencies() {
        assert_eq!(format(dec!(9.99), "EUR"), "9.99 €");
        assert_eq!(format(dec!(12), "CHF"), "12.00 CHF");
        assert_eq!(format(dec!(100), "SEK"), "100.00 kr");
        assert_eq!(format(dec!(100), "NOK"), "100.00 kr");
        assert_eq!(format(dec!(100), "DKK"), "100.00 kr");
        assert_eq!(format(dec!(250), "CZK"), "250.00 Kč");
        assert_eq!(format(dec!(49.5), "RON"), "49.50 lei");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(format(dec!(10.50), "XYZ"), "XYZ10.50");
        assert_eq!(format_with(dec!(10.50), "XYZ", true, true), "XYZ10.50 XYZ");
        assert_eq!(format(dec!(10.50), "xyz"), "XYZ10.50");
        assert_eq!(resolve("XYZ"), ResolvedCurrency::Fallback("XYZ".into()));
    }

    #[test]
    fn resolves_known_codes() {
        match resolve("usd") {
            ResolvedCurrency::Resolved(currency) => assert_eq!(currency.code(), "USD"),
            other => panic!("expected a resolved currency, got {:?}", other),
        }
    }

    #[test]
    fn case_does_not_matter() {
        assert_eq!(format(dec!(12.99), "usd"), format(dec!(12.99), "USD"));
        assert_eq!(format(dec!(12.99), "UsD"), format(dec!(12.99), "USD"));
        assert_eq!(format(dec!(9.99), "eur"), "9.99 €");
    }

    #[test]
    fn show_flags_control_symbol_and_code() {
        assert_eq!(format_with(dec!(12.99), "USD", true, true), "$12.99 USD");
        assert_eq!(format_with(dec!(12.99), "USD", false, false), "12.99");
        assert_eq!(format_with(dec!(12.99), "usd", false, true), "12.99 USD");
        assert_eq!(format_with(dec!(9.99), "EUR", true, true), "9.99 € EUR");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format(dec!(-5.25), "USD"), "$-5.25");
        assert_eq!(format(dec!(-5.25), "EUR"), "-5.25 €");
        // Rounds to zero, so no sign survives.
        assert_eq!(format(dec!(-0.004), "USD"), "$0.00");
    }
}
