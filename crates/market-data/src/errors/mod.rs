//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`TransportError`]: The error enum for every transport and decoding failure
//! - [`ConfigError`]: Failures while building a [`TransportConfig`](crate::TransportConfig)
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

use crate::models::Endpoint;

/// Errors that can occur while talking to the provider.
///
/// Each variant is classified into a [`RetryClass`] via the [`retry_class`](Self::retry_class)
/// method. The transport itself never retries.
#[derive(Error, Debug)]
pub enum TransportError {
    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request to the provider timed out.
    #[error("Timeout: {endpoint}")]
    Timeout {
        /// The endpoint that timed out
        endpoint: Endpoint,
    },

    /// The provider rejected the request parameters (HTTP 400).
    #[error("Bad request to {endpoint}: {message}")]
    BadRequest {
        /// The endpoint that rejected the request
        endpoint: Endpoint,
        /// The error message from the provider
        message: String,
    },

    /// The API key is missing, invalid or not allowed to use the endpoint (HTTP 401/403).
    #[error("Unauthorized: {endpoint}")]
    Unauthorized {
        /// The endpoint that rejected the key
        endpoint: Endpoint,
    },

    /// The provider has no record for the request.
    /// Raised for HTTP 404 and for empty single-record responses.
    #[error("Not found: {endpoint}")]
    NotFound {
        /// The endpoint that returned nothing
        endpoint: Endpoint,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {endpoint}")]
    RateLimited {
        /// The endpoint that rate limited the request
        endpoint: Endpoint,
    },

    /// Any other non-success HTTP status.
    #[error("HTTP {status} from {endpoint}: {message}")]
    Http {
        /// The endpoint that failed
        endpoint: Endpoint,
        /// The HTTP status code
        status: u16,
        /// The error message from the provider
        message: String,
    },

    /// The response body did not match the payload shape of the endpoint.
    #[error("Failed to decode {endpoint} payload: {message}")]
    Decode {
        /// The endpoint whose payload failed to decode
        endpoint: Endpoint,
        /// Description of the decoding failure
        message: String,
    },

    /// The transport could not be configured.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TransportError {
    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use apininjas_market_data::errors::{RetryClass, TransportError};
    /// use apininjas_market_data::Endpoint;
    ///
    /// let error = TransportError::RateLimited { endpoint: Endpoint::Stock };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = TransportError::NotFound { endpoint: Endpoint::Stock };
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::RateLimited { .. } | Self::Timeout { .. } | Self::Network(_) => {
                RetryClass::WithBackoff
            }

            Self::Http { status, .. } if *status >= 500 => RetryClass::WithBackoff,

            Self::BadRequest { .. }
            | Self::Unauthorized { .. }
            | Self::NotFound { .. }
            | Self::Http { .. }
            | Self::Decode { .. }
            | Self::Config(_) => RetryClass::Never,
        }
    }

    /// The endpoint the failure belongs to, if any.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::Timeout { endpoint }
            | Self::BadRequest { endpoint, .. }
            | Self::Unauthorized { endpoint }
            | Self::NotFound { endpoint }
            | Self::RateLimited { endpoint }
            | Self::Http { endpoint, .. }
            | Self::Decode { endpoint, .. } => Some(*endpoint),
            Self::Network(_) | Self::Config(_) => None,
        }
    }
}

/// Errors related to transport configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable required by the transport is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// A configuration value could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// The configuration key
        key: String,
        /// The rejected value
        value: String,
    },
}
