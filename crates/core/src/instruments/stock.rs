use std::fmt;
use std::hash::{Hash, Hasher};

use apininjas_market_data::{FinanceApi, StockPayload};
use async_trait::async_trait;

use super::quote::QuoteSnapshot;
use super::traits::Instrument;
use crate::errors::{Error, Result};
use crate::snapshot::{RefreshState, SnapshotCell};

/// Exchange values the provider uses for buckets that are not real markets.
const SYNTHETIC_EXCHANGES: [&str; 2] = ["COMMODITY", "CRYPTO"];

/// A stock quoted by ticker.
#[derive(Debug)]
pub struct Stock {
    api: FinanceApi,
    ticker: String,
    name: String,
    exchange: Option<String>,
    quote: SnapshotCell<QuoteSnapshot>,
}

impl Stock {
    pub fn from_payload(api: FinanceApi, payload: StockPayload) -> Self {
        let exchange = (!SYNTHETIC_EXCHANGES.contains(&payload.exchange.as_str()))
            .then_some(payload.exchange);

        Self {
            api,
            ticker: payload.ticker,
            name: payload.name,
            exchange,
            quote: SnapshotCell::new(QuoteSnapshot::new(payload.price, payload.updated)),
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exchange the stock trades on; `None` for the provider's synthetic buckets.
    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }
}

#[async_trait]
impl Instrument for Stock {
    fn quote(&self) -> QuoteSnapshot {
        self.quote.get()
    }

    fn refresh_state(&self) -> RefreshState {
        self.quote.state()
    }

    async fn refresh(&self) -> Result<f64> {
        let quote = self
            .quote
            .refresh_with(async {
                let payload = self.api.get_stock(&self.ticker).await?;
                Ok::<_, Error>(QuoteSnapshot::new(payload.price, payload.updated))
            })
            .await?;
        Ok(quote.price)
    }
}

impl PartialEq for Stock {
    fn eq(&self, other: &Self) -> bool {
        self.ticker == other.ticker
    }
}

impl Eq for Stock {}

impl Hash for Stock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ticker.hash(state);
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
