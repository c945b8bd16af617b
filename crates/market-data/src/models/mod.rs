//! Market data models
//!
//! This module contains the endpoint catalogue and the typed payload records
//! the provider answers with:
//! - `endpoint` - The closed set of remote operations (Endpoint)
//! - `instrument` - Quoted instruments (StockPayload, GoldPayload, CommodityPayload, CryptoPayload)
//! - `currency` - Exchange rates and conversions
//! - `reference` - Point-in-time answers (IbanValidationPayload, InflationPayload)
//! - `types` - Type aliases shared by the transport layer

mod currency;
mod endpoint;
mod instrument;
mod reference;
mod types;

pub use currency::{CurrencyConversionPayload, ExchangeRatePayload};
pub use endpoint::Endpoint;
pub use instrument::{
    CommodityPayload, CryptoPayload, CryptoSymbolsPayload, GoldPayload, StockPayload,
};
pub use reference::{IbanValidationPayload, InflationPayload};
pub use types::QueryParams;
