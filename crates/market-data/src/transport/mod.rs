//! Transport abstractions and implementations.
//!
//! This module contains:
//! - The `Transport` trait every request goes through
//! - `TransportConfig`, the settings of the HTTP transport
//! - `HttpTransport`, the reqwest-backed implementation
//! - `MockTransport`, a scripted in-memory implementation (tests and the `mock` feature)
//!
//! The transport owns the wire protocol, authentication and timeouts. It never
//! retries; failures surface to the caller as [`TransportError`](crate::errors::TransportError).

mod config;
mod http;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod traits;

pub use config::{TransportConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use http::HttpTransport;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockTransport, RecordedCall};
pub use traits::Transport;
