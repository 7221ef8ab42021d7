//! Maps storefront countries to the currency the upstream catalog API prices
//! them in.
//!
//! The table is not an ISO 4217 authority and must not be treated as one. A
//! long tail of storefronts (Argentina, Ukraine, most of Latin America, the
//! Gulf states) get USD prices from the API regardless of their local
//! currency, and the table records that observed behavior. Correct here means
//! matching what the API actually returns for a region, so keep the table
//! as-is rather than aligning it with the geographic standard.

use crate::{catalog, models::currency::Currency};
use once_cell::sync::Lazy;
use std::collections::HashMap;

const TABLE: &[(&str, &str)] = &[
    // Storefronts priced in their own currency.
    ("US", "USD"),
    ("JP", "JPY"),
    ("GB", "GBP"),
    ("AU", "AUD"),
    ("CA", "CAD"),
    ("CH", "CHF"),
    ("CN", "CNY"),
    ("SE", "SEK"),
    ("NO", "NOK"),
    ("DK", "DKK"),
    ("NZ", "NZD"),
    ("MX", "MXN"),
    ("SG", "SGD"),
    ("HK", "HKD"),
    ("KR", "KRW"),
    ("TR", "TRY"),
    ("RU", "RUB"),
    ("IN", "INR"),
    ("BR", "BRL"),
    ("ZA", "ZAR"),
    ("PL", "PLN"),
    ("TH", "THB"),
    ("ID", "IDR"),
    ("HU", "HUF"),
    ("CZ", "CZK"),
    ("IL", "ILS"),
    ("CL", "CLP"),
    ("PH", "PHP"),
    ("AE", "AED"),
    ("CO", "COP"),
    ("SA", "SAR"),
    ("MY", "MYR"),
    ("RO", "RON"),
    ("VN", "VND"),
    ("TW", "TWD"),
    ("EG", "EGP"),
    ("PK", "PKR"),
    ("NG", "NGN"),
    ("KZ", "KZT"),
    // Eurozone storefronts.
    ("AT", "EUR"),
    ("BE", "EUR"),
    ("CY", "EUR"),
    ("DE", "EUR"),
    ("EE", "EUR"),
    ("ES", "EUR"),
    ("FI", "EUR"),
    ("FR", "EUR"),
    ("GR", "EUR"),
    ("IE", "EUR"),
    ("IT", "EUR"),
    ("LT", "EUR"),
    ("LU", "EUR"),
    ("LV", "EUR"),
    ("MT", "EUR"),
    ("NL", "EUR"),
    ("PT", "EUR"),
    ("SI", "EUR"),
    ("SK", "EUR"),
    // Storefronts the API prices in USD regardless of local currency.
    ("AG", "USD"),
    ("AI", "USD"),
    ("AM", "USD"),
    ("AR", "USD"),
    ("AZ", "USD"),
    ("BB", "USD"),
    ("BD", "USD"),
    ("BH", "USD"),
    ("BM", "USD"),
    ("BN", "USD"),
    ("BO", "USD"),
    ("BS", "USD"),
    ("BW", "USD"),
    ("BY", "USD"),
    ("BZ", "USD"),
    ("CR", "USD"),
    ("DM", "USD"),
    ("DO", "USD"),
    ("EC", "USD"),
    ("FJ", "USD"),
    ("GD", "USD"),
    ("GE", "USD"),
    ("GH", "USD"),
    ("GT", "USD"),
    ("GY", "USD"),
    ("HN", "USD"),
    ("JM", "USD"),
    ("JO", "USD"),
    ("KE", "USD"),
    ("KG", "USD"),
    ("KH", "USD"),
    ("KN", "USD"),
    ("KW", "USD"),
    ("KY", "USD"),
    ("LA", "USD"),
    ("LB", "USD"),
    ("LC", "USD"),
    ("LK", "USD"),
    ("MD", "USD"),
    ("MN", "USD"),
    ("MO", "USD"),
    ("MS", "USD"),
    ("NI", "USD"),
    ("NP", "USD"),
    ("OM", "USD"),
    ("PA", "USD"),
    ("PE", "USD"),
    ("PG", "USD"),
    ("PY", "USD"),
    ("QA", "USD"),
    ("SR", "USD"),
    ("SV", "USD"),
    ("TC", "USD"),
    ("TT", "USD"),
    ("TZ", "USD"),
    ("UA", "USD"),
    ("UG", "USD"),
    ("UY", "USD"),
    ("UZ", "USD"),
    ("VC", "USD"),
    ("VE", "USD"),
    ("VG", "USD"),
];

static COUNTRY_CURRENCY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    TABLE.iter().copied().collect()
});

/// The currency code the API prices the given storefront country in.
/// Case-insensitive; returns `None` for unmapped codes, including the empty
/// string.
pub fn currency_for_country(country_code: &str) -> Option<&'static str> {
    let country_code = country_code.trim().to_uppercase();
    COUNTRY_CURRENCY.get(country_code.as_str()).copied()
}

/// The full catalog record for the given storefront country's currency.
pub fn currency_object_for_country(country_code: &str) -> Option<&'static Currency> {
    currency_for_country(country_code).and_then(catalog::get_by_code)
}

/// All country codes whose storefront is priced in the given currency.
/// Case-insensitive; unordered.
pub fn countries_for_currency(currency_code: &str) -> Vec<&'static str> {
    COUNTRY_CURRENCY.iter()
        .filter(|(_, mapped)| mapped.eq_ignore_ascii_case(currency_code.trim()))
        .map(|(country, _)| *country)
        .collect()
}

/// Whether the given country code has a storefront mapping at all.
pub fn has_mapping(country_code: &str) -> bool {
    currency_for_country(country_code).is_some()
}
