use std::fmt;
use std::hash::{Hash, Hasher};

use apininjas_market_data::{CryptoPayload, FinanceApi};
use async_trait::async_trait;

use super::quote::QuoteSnapshot;
use super::traits::Instrument;
use crate::errors::{Error, Result};
use crate::snapshot::{RefreshState, SnapshotCell};

/// A cryptocurrency trading pair quoted by symbol, e.g. `BTCUSDT`.
#[derive(Debug)]
pub struct Crypto {
    api: FinanceApi,
    symbol: String,
    quote: SnapshotCell<QuoteSnapshot>,
}

impl Crypto {
    pub fn from_payload(api: FinanceApi, payload: CryptoPayload) -> Self {
        Self {
            api,
            quote: SnapshotCell::new(QuoteSnapshot::new(payload.price, payload.timestamp)),
            symbol: payload.symbol,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

#[async_trait]
impl Instrument for Crypto {
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
                let payload = self.api.get_crypto(&self.symbol).await?;
                Ok::<_, Error>(QuoteSnapshot::new(payload.price, payload.timestamp))
            })
            .await?;
        Ok(quote.price)
    }
}

impl PartialEq for Crypto {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Crypto {}

impl Hash for Crypto {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl fmt::Display for Crypto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apininjas_market_data::{Endpoint, MockTransport, TransportError};
    use serde_json::json;
    use std::sync::Arc;

    fn btc(transport: &Arc<MockTransport>, price: f64) -> Crypto {
        Crypto::from_payload(
            FinanceApi::new(transport.clone()),
            CryptoPayload {
                symbol: "BTCUSDT".to_string(),
                price,
                timestamp: 1706302801,
            },
        )
    }

    #[test]
    fn test_display_is_symbol() {
        let transport = Arc::new(MockTransport::new());
        let crypto = btc(&transport, 42000.5);
        assert_eq!(crypto.to_string(), "BTCUSDT");
        assert_eq!(crypto.price(), 42000.5);
        assert_eq!(crypto.last_updated(), 1706302801);
    }

    #[tokio::test]
    async fn test_refresh_reads_string_price() {
        let transport = Arc::new(MockTransport::new());
        transport.push_ok(
            Endpoint::Crypto,
            json!({ "symbol": "BTCUSDT", "price": "43125.17000000", "timestamp": 1706310000 }),
        );
        let crypto = btc(&transport, 42000.5);

        assert_eq!(crypto.refresh().await.unwrap(), 43125.17);
        assert_eq!(crypto.last_updated(), 1706310000);
        assert_eq!(transport.calls()[0].param("symbol"), Some("BTCUSDT"));
    }

    #[tokio::test]
    async fn test_unknown_symbol_keeps_quote() {
        let transport = Arc::new(MockTransport::new());
        transport.push_ok(Endpoint::Crypto, json!({}));
        let crypto = btc(&transport, 42000.5);

        let result = crypto.refresh().await;
        assert!(matches!(
            result,
            Err(Error::Transport(TransportError::NotFound { .. }))
        ));
        assert_eq!(crypto.price(), 42000.5);
    }
}
