//! API-Ninjas Market Data Crate
//!
//! This crate talks to the API-Ninjas finance endpoints and hands back typed
//! payload records. It knows nothing about instruments or their lifecycle;
//! that lives in `apininjas-core`.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   FinanceApi     |  (typed methods, payload decoding)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Transport     |  (trait: endpoint + params -> JSON)
//! +------------------+
//!     |          |
//!     v          v
//! +--------+ +--------+
//! |  Http  | |  Mock  |
//! +--------+ +--------+
//! ```
//!
//! # Core Types
//!
//! - [`Endpoint`] - The closed set of remote operations
//! - [`Transport`] - Pluggable request execution
//! - [`HttpTransport`] / [`TransportConfig`] - The reqwest-backed transport and its settings
//! - [`FinanceApi`] - Typed endpoint methods over any transport
//! - [`TransportError`] - Every failure, classified by [`RetryClass`]

pub mod api;
pub mod errors;
pub mod models;
pub mod transport;

pub use api::FinanceApi;

pub use errors::{ConfigError, RetryClass, TransportError};

pub use models::{
    CommodityPayload, CryptoPayload, CryptoSymbolsPayload, CurrencyConversionPayload, Endpoint,
    ExchangeRatePayload, GoldPayload, IbanValidationPayload, InflationPayload, QueryParams,
    StockPayload,
};

pub use transport::{HttpTransport, Transport, TransportConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

#[cfg(any(test, feature = "mock"))]
pub use transport::{MockTransport, RecordedCall};
