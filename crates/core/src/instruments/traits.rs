use std::cmp::Ordering;
use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::quote::QuoteSnapshot;
use crate::errors::Result;
use crate::snapshot::RefreshState;

/// A quoted, refreshable financial entity.
///
/// Equality (`PartialEq`) is identity based: a ticker, a symbol or a commodity
/// type. Two fetches of the same ticker stay equal whatever their prices.
/// Ordering is a separate, named operation over the current price; it is not
/// exposed through `PartialOrd` because it disagrees with equality.
#[async_trait]
pub trait Instrument: fmt::Display + Send + Sync {
    /// The current quote snapshot.
    fn quote(&self) -> QuoteSnapshot;

    fn refresh_state(&self) -> RefreshState;

    /// Fetches a fresh quote and replaces the held snapshot.
    ///
    /// Returns the new price. On failure the previous snapshot is kept and
    /// the transport error is returned unchanged.
    async fn refresh(&self) -> Result<f64>;

    fn price(&self) -> f64 {
        self.quote().price
    }

    /// Provider timestamp of the current price.
    fn last_updated(&self) -> i64 {
        self.quote().updated
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.quote().updated_at()
    }

    /// Total order over the current prices of two instruments of one kind.
    ///
    /// Equal prices tie regardless of identity.
    fn compare_by_price(&self, other: &Self) -> Ordering
    where
        Self: Sized,
    {
        self.price().total_cmp(&other.price())
    }
}
