//! Scripted in-memory transport.
//!
//! Responses are queued per endpoint and handed out in order. Every call is
//! recorded so tests can assert on what was requested.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::TransportError;
use crate::models::{Endpoint, QueryParams};

use super::traits::Transport;

/// A request seen by [`MockTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub endpoint: Endpoint,
    pub params: Vec<(String, String)>,
}

impl RecordedCall {
    /// Value of the named query parameter, if it was sent.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Transport answering from a queue of scripted responses.
///
/// An endpoint without a queued response fails with
/// [`TransportError::NotFound`].
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<Endpoint, VecDeque<Result<Value, TransportError>>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response for `endpoint`.
    pub fn push_ok(&self, endpoint: Endpoint, body: Value) -> &Self {
        self.push(endpoint, Ok(body))
    }

    /// Queue a failure for `endpoint`.
    pub fn push_err(&self, endpoint: Endpoint, error: TransportError) -> &Self {
        self.push(endpoint, Err(error))
    }

    fn push(&self, endpoint: Endpoint, response: Result<Value, TransportError>) -> &Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(endpoint)
            .or_default()
            .push_back(response);
        self
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of calls made to `endpoint`.
    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|call| call.endpoint == endpoint)
            .count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(
        &self,
        endpoint: Endpoint,
        params: &QueryParams,
    ) -> Result<Value, TransportError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                endpoint,
                params: params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            });

        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front)
            .unwrap_or(Err(TransportError::NotFound { endpoint }))
    }
}
