//! reqwest-backed transport for the API-Ninjas REST endpoints.
//!
//! Every request is a `GET {base_url}/{endpoint path}?{params}` carrying the
//! API key in the `X-Api-Key` header. Non-success statuses are mapped onto
//! [`TransportError`] variants; the body of an error response is searched for
//! the provider's `{"error": "..."}` message.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::errors::{ConfigError, TransportError};
use crate::models::{Endpoint, QueryParams};

use super::config::TransportConfig;
use super::traits::Transport;

const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP transport for the API-Ninjas finance endpoints.
///
/// # Example
///
/// ```ignore
/// use apininjas_market_data::{HttpTransport, TransportConfig};
///
/// let transport = HttpTransport::new(TransportConfig::new("your_api_key"));
/// ```
pub struct HttpTransport {
    client: Client,
    config: TransportConfig,
}

impl HttpTransport {
    /// Create a new transport from the given config.
    pub fn new(config: TransportConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Create a transport configured from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        TransportConfig::from_env().map(Self::new)
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn map_send_error(endpoint: Endpoint, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout { endpoint }
        } else {
            TransportError::Network(error)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        endpoint: Endpoint,
        params: &QueryParams,
    ) -> Result<Value, TransportError> {
        let url = self.config.url_for(endpoint.path());
        debug!(
            "GET {} with params [{}]",
            url,
            params
                .iter()
                .map(|(key, _)| *key)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(params)
            .send()
            .await
            .map_err(|e| Self::map_send_error(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} answered with HTTP {}", endpoint, status.as_u16());
            return Err(status_error(endpoint, status, &body));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode {
                endpoint,
                message: e.to_string(),
            })
    }
}

/// Map a non-success status onto a transport error.
pub(crate) fn status_error(endpoint: Endpoint, status: StatusCode, body: &str) -> TransportError {
    match status {
        StatusCode::BAD_REQUEST => TransportError::BadRequest {
            endpoint,
            message: error_message(status, body),
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            TransportError::Unauthorized { endpoint }
        }
        StatusCode::NOT_FOUND => TransportError::NotFound { endpoint },
        StatusCode::TOO_MANY_REQUESTS => TransportError::RateLimited { endpoint },
        _ => TransportError::Http {
            endpoint,
            status: status.as_u16(),
            message: error_message(status, body),
        },
    }
}

/// Pull the provider's `{"error": "..."}` message out of an error body.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(Value::as_str).map(str::to_string))
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown API error")
                .to_string()
        })
}
