use std::fmt;
use std::time::Duration;

use crate::errors::ConfigError;

/// Default provider base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com/v1/";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_VAR: &str = "API_NINJAS_KEY";
const BASE_URL_VAR: &str = "API_NINJAS_BASE_URL";
const TIMEOUT_VAR: &str = "API_NINJAS_TIMEOUT_MS";

/// Settings for [`HttpTransport`](super::HttpTransport).
#[derive(Clone)]
pub struct TransportConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl TransportConfig {
    /// Config with the given key and default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the config from the environment, loading a `.env` file first if one exists.
    ///
    /// - `API_NINJAS_KEY` (required)
    /// - `API_NINJAS_BASE_URL` (default [`DEFAULT_BASE_URL`])
    /// - `API_NINJAS_TIMEOUT_MS` (default 30000)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(API_KEY_VAR.to_string()))?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let timeout_ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: TIMEOUT_VAR.to_string(),
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_millis(timeout_ms);
        }

        Ok(config)
    }

    /// Full URL for a relative endpoint path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
