//! API-Ninjas Core - Refreshable instruments and reference records.
//!
//! This crate turns the payloads of `apininjas-market-data` into domain
//! entities:
//! - Quoted [`instruments`] (stocks, crypto, commodity futures) that compare by
//!   identity, order by price and refresh themselves in place
//! - [`reference`] records (currencies, IBAN validations, inflation readings)
//! - [`categorical`] value sets that accept values unknown at build time
//!
//! The [`Client`] facade is the usual entry point.

pub mod categorical;
pub mod client;
pub mod errors;
pub mod instruments;
pub mod reference;
mod snapshot;

pub use categorical::{CommodityType, InflationCountry, InflationIndicatorType, UnknownValue};
pub use client::Client;
pub use instruments::{
    refresh_all, sort_by_price, AnyInstrument, Commodity, Crypto, Instrument, QuoteSnapshot, Stock,
};
pub use reference::{
    Currency, CurrencyConversion, CurrencyWithAmount, IbanValidation, Inflation, Period,
};
pub use snapshot::RefreshState;

// Re-export error types
pub use errors::Error;
pub use errors::MalformedPeriodError;
pub use errors::Result;
