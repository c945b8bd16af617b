//! Quoted instruments.
//!
//! This module contains:
//! - [`Instrument`] - The contract every quoted entity implements
//! - [`Stock`], [`Crypto`], [`Commodity`] - The concrete variants
//! - [`AnyInstrument`] - A tagged union for mixed collections
//! - [`QuoteSnapshot`] - The (price, timestamp) pair swapped on refresh

mod commodity;
mod crypto;
mod quote;
mod stock;
mod traits;

pub use commodity::Commodity;
pub use crypto::Crypto;
pub use quote::QuoteSnapshot;
pub use stock::Stock;
pub use traits::Instrument;

use std::cmp::Ordering;
use std::fmt;

use futures::future::join_all;

use crate::errors::Result;
use crate::snapshot::RefreshState;

/// Any quoted instrument.
///
/// Equality holds only between instruments of the same variant with the same
/// identity. Price ordering is defined within a variant only.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum AnyInstrument {
    Stock(Stock),
    Crypto(Crypto),
    Commodity(Commodity),
}

impl AnyInstrument {
    /// Price ordering; `None` when the variants differ.
    pub fn compare_by_price(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Stock(a), Self::Stock(b)) => Some(a.compare_by_price(b)),
            (Self::Crypto(a), Self::Crypto(b)) => Some(a.compare_by_price(b)),
            (Self::Commodity(a), Self::Commodity(b)) => Some(a.compare_by_price(b)),
            _ => None,
        }
    }

    /// The wrapped instrument behind the shared contract.
    pub fn as_instrument(&self) -> &dyn Instrument {
        match self {
            Self::Stock(stock) => stock,
            Self::Crypto(crypto) => crypto,
            Self::Commodity(commodity) => commodity,
        }
    }

    pub fn quote(&self) -> QuoteSnapshot {
        self.as_instrument().quote()
    }

    pub fn price(&self) -> f64 {
        self.quote().price
    }

    pub fn last_updated(&self) -> i64 {
        self.quote().updated
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.as_instrument().refresh_state()
    }

    pub async fn refresh(&self) -> Result<f64> {
        self.as_instrument().refresh().await
    }
}

impl fmt::Display for AnyInstrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_instrument(), f)
    }
}

impl From<Stock> for AnyInstrument {
    fn from(stock: Stock) -> Self {
        Self::Stock(stock)
    }
}

impl From<Crypto> for AnyInstrument {
    fn from(crypto: Crypto) -> Self {
        Self::Crypto(crypto)
    }
}

impl From<Commodity> for AnyInstrument {
    fn from(commodity: Commodity) -> Self {
        Self::Commodity(commodity)
    }
}

/// Refreshes every instrument concurrently.
///
/// Results come back in input order. One failure does not affect the others.
pub async fn refresh_all<'a, I, T>(instruments: I) -> Vec<Result<f64>>
where
    I: IntoIterator<Item = &'a T>,
    T: Instrument + ?Sized + 'a,
{
    join_all(instruments.into_iter().map(|instrument| instrument.refresh())).await
}

/// Sorts by ascending price. Ties keep their relative order.
pub fn sort_by_price<I: Instrument>(instruments: &mut [I]) {
    instruments.sort_by(|a, b| a.compare_by_price(b));
}
