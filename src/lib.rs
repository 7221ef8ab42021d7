//! Currency catalog, country mapping, and price formatting for storefront
//! catalog apps.
//!
//! The upstream catalog API prices items per storefront region, and not
//! always in the region's own currency. This crate holds the read-only tables
//! describing those currencies and regions, a deterministic formatter for
//! rendering prices, and the [`Money`] value type domain models carry.
//!
//! Everything here is pure computation over immutable static data: no I/O,
//! no locking, no mutable state across calls. The tables are built once on
//! first use and shared freely across threads.
//!
//! ```rust
//! use storefront_money::{catalog, country, formatter, Money};
//!
//! let code = country::currency_for_country("jp").unwrap();
//! assert_eq!(code, "JPY");
//! assert_eq!(formatter::format(storefront_money::num!(1250.7), code), "¥1,251");
//!
//! let price = Money::from_f64(12.99, "USD").unwrap();
//! assert_eq!(price.format(), "$12.99");
//! assert!(catalog::get_by_code("usd").is_some());
//! ```

pub mod error;
#[macro_use]
mod util;
mod models;
pub mod catalog;
pub mod country;
pub mod formatter;

pub use error::{Error, Result};
pub use formatter::ResolvedCurrency;
pub use models::{
    currency::Currency,
    money::Money,
};
