//! Transport trait definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::TransportError;
use crate::models::{Endpoint, QueryParams};

/// Performs one request/response cycle against a named endpoint.
///
/// Implementations own the wire protocol, authentication and any timeout
/// policy. They return the decoded JSON body, or fail with a
/// [`TransportError`]. Callers never see partial responses.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use apininjas_market_data::{Endpoint, QueryParams, Transport, TransportError};
///
/// struct Offline;
///
/// #[async_trait]
/// impl Transport for Offline {
///     async fn get(
///         &self,
///         endpoint: Endpoint,
///         _params: &QueryParams,
///     ) -> Result<serde_json::Value, TransportError> {
///         Err(TransportError::NotFound { endpoint })
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a `GET` to `endpoint` with the given query parameters.
    async fn get(&self, endpoint: Endpoint, params: &QueryParams)
        -> Result<Value, TransportError>;
}
