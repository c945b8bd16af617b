use std::fmt;
use std::hash::{Hash, Hasher};

use apininjas_market_data::{CommodityPayload, FinanceApi, GoldPayload};
use async_trait::async_trait;

use super::quote::QuoteSnapshot;
use super::traits::Instrument;
use crate::categorical::CommodityType;
use crate::errors::Result;
use crate::snapshot::{RefreshState, SnapshotCell};

const GOLD_NAME: &str = "Gold Futures";
const GOLD_EXCHANGE: &str = "CME";

/// A commodity future, identified by its [`CommodityType`].
///
/// Gold is quoted by a dedicated endpoint whose payload carries no name or
/// exchange, so both are fixed for it.
#[derive(Debug)]
pub struct Commodity {
    api: FinanceApi,
    kind: CommodityType,
    name: String,
    exchange: String,
    quote: SnapshotCell<QuoteSnapshot>,
}

impl Commodity {
    pub fn from_payload(api: FinanceApi, kind: CommodityType, payload: CommodityPayload) -> Self {
        let quote = QuoteSnapshot::new(payload.price, payload.updated);
        if kind == CommodityType::Gold {
            return Self::gold(api, quote);
        }

        Self {
            api,
            kind,
            name: payload.name,
            exchange: payload.exchange,
            quote: SnapshotCell::new(quote),
        }
    }

    pub fn from_gold(api: FinanceApi, payload: GoldPayload) -> Self {
        Self::gold(api, QuoteSnapshot::new(payload.price, payload.updated))
    }

    fn gold(api: FinanceApi, quote: QuoteSnapshot) -> Self {
        Self {
            api,
            kind: CommodityType::Gold,
            name: GOLD_NAME.to_string(),
            exchange: GOLD_EXCHANGE.to_string(),
            quote: SnapshotCell::new(quote),
        }
    }

    pub fn kind(&self) -> &CommodityType {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    async fn fetch_quote(&self) -> Result<QuoteSnapshot> {
        let quote = match self.kind {
            CommodityType::Gold => {
                let payload = self.api.get_gold().await?;
                QuoteSnapshot::new(payload.price, payload.updated)
            }
            _ => {
                let payload = self.api.get_commodity(self.kind.raw()).await?;
                QuoteSnapshot::new(payload.price, payload.updated)
            }
        };
        Ok(quote)
    }
}

#[async_trait]
impl Instrument for Commodity {
    fn quote(&self) -> QuoteSnapshot {
        self.quote.get()
    }

    fn refresh_state(&self) -> RefreshState {
        self.quote.state()
    }

    async fn refresh(&self) -> Result<f64> {
        let quote = self.quote.refresh_with(self.fetch_quote()).await?;
        Ok(quote.price)
    }
}

impl PartialEq for Commodity {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Commodity {}

impl Hash for Commodity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
