//! Core error types.
//!
//! Transport failures are wrapped unchanged; nothing in this crate retries or
//! suppresses them. An unknown categorical value is never an error.

use thiserror::Error;

pub use apininjas_market_data::errors::{ConfigError, RetryClass, TransportError};

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type of the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport failed: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    MalformedPeriod(#[from] MalformedPeriodError),

    #[error("Invalid provider data: {0}")]
    InvalidData(String),
}

impl Error {
    /// Retry hint for the caller. Only transport failures may be worth retrying.
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Error::Transport(e) => e.retry_class(),
            Error::MalformedPeriod(_) | Error::InvalidData(_) => RetryClass::Never,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Transport(TransportError::Config(err))
    }
}

/// An inflation period that is not a three-letter month followed by a four-digit year.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed inflation period '{raw}', expected e.g. 'Jan 2024'")]
pub struct MalformedPeriodError {
    pub raw: String,
}

impl MalformedPeriodError {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}
