//! Reference records: rates and point-in-time answers that are not ordered by price.
//!
//! - [`Currency`] - refreshable exchange rate against a reference currency
//! - [`CurrencyConversion`] - both sides of a converted amount
//! - [`IbanValidation`] - immutable IBAN check result
//! - [`Inflation`] - immutable inflation reading for one [`Period`]

mod currency;
mod iban;
mod inflation;

pub use currency::{Currency, CurrencyConversion, CurrencyWithAmount};
pub use iban::IbanValidation;
pub use inflation::{Inflation, Period};
