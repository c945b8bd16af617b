//! Client - Facade over the market-data crate.
//!
//! The client issues one request per call and builds the matching domain
//! entity from the decoded payload. Entities keep a handle to the same
//! [`FinanceApi`] so they can refresh themselves later.
//!
//! # Architecture
//!
//! ```text
//! +-------------------------------------------------------------+
//! |                         Client                              |
//! |                                                             |
//! |  fetch_* --> FinanceApi --> Transport --> JSON              |
//! |                  |                                          |
//! |                  v                                          |
//! |            payload record --> Stock / Crypto / Commodity    |
//! |                               Currency / IbanValidation     |
//! |                               Inflation                     |
//! +-------------------------------------------------------------+
//! ```

use std::sync::Arc;

use log::debug;

use apininjas_market_data::{FinanceApi, HttpTransport, Transport, TransportConfig};

use crate::categorical::{CommodityType, InflationCountry, InflationIndicatorType};
use crate::errors::Result;
use crate::instruments::{Commodity, Crypto, Instrument, Stock};
use crate::reference::{Currency, CurrencyConversion, IbanValidation, Inflation};

/// Entry point for fetching instruments and reference records.
#[derive(Debug, Clone)]
pub struct Client {
    api: FinanceApi,
}

impl Client {
    /// Create a client talking HTTP with the given config.
    pub fn new(config: TransportConfig) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(config)))
    }

    /// Create a client configured from the environment (and a `.env` file, if present).
    pub fn from_env() -> Result<Self> {
        let config = TransportConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Create a client over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            api: FinanceApi::new(transport),
        }
    }

    pub fn api(&self) -> &FinanceApi {
        &self.api
    }

    pub async fn fetch_stock(&self, ticker: &str) -> Result<Stock> {
        let payload = self.api.get_stock(ticker).await?;
        let stock = Stock::from_payload(self.api.clone(), payload);
        debug!("Fetched stock {} at {}", stock.ticker(), stock.price());
        Ok(stock)
    }

    pub async fn fetch_gold(&self) -> Result<Commodity> {
        let payload = self.api.get_gold().await?;
        let gold = Commodity::from_gold(self.api.clone(), payload);
        debug!("Fetched gold at {}", gold.price());
        Ok(gold)
    }

    /// Fetch a commodity future. Gold goes through the gold endpoint.
    pub async fn fetch_commodity(&self, kind: CommodityType) -> Result<Commodity> {
        if kind == CommodityType::Gold {
            return self.fetch_gold().await;
        }

        let payload = self.api.get_commodity(kind.raw()).await?;
        let commodity = Commodity::from_payload(self.api.clone(), kind, payload);
        debug!(
            "Fetched commodity {} at {}",
            commodity.kind().identifier(),
            commodity.price()
        );
        Ok(commodity)
    }

    pub async fn fetch_crypto(&self, symbol: &str) -> Result<Crypto> {
        let payload = self.api.get_crypto(symbol).await?;
        let crypto = Crypto::from_payload(self.api.clone(), payload);
        debug!("Fetched crypto {} at {}", crypto.symbol(), crypto.price());
        Ok(crypto)
    }

    /// All crypto symbols the provider quotes.
    pub async fn fetch_crypto_symbols(&self) -> Result<Vec<String>> {
        let symbols = self.api.get_crypto_symbols().await?;
        debug!("Fetched {} crypto symbols", symbols.len());
        Ok(symbols)
    }

    /// Fetch `name` priced against `reference`.
    pub async fn fetch_exchange_rate(&self, name: &str, reference: &str) -> Result<Currency> {
        let pair = format!("{}_{}", reference, name);
        let payload = self.api.get_exchange_rate(&pair).await?;
        debug!("Fetched exchange rate {} = {}", pair, payload.exchange_rate);
        Ok(Currency::new(
            self.api.clone(),
            name,
            reference,
            payload.exchange_rate,
        ))
    }

    pub async fn convert_currency(
        &self,
        amount: f64,
        have: &str,
        want: &str,
    ) -> Result<CurrencyConversion> {
        let payload = self.api.convert_currency(amount, have, want).await?;
        let conversion = CurrencyConversion::from_payload(self.api.clone(), payload)?;
        debug!(
            "Converted {} {} to {} {}",
            conversion.old.amount,
            conversion.old.currency,
            conversion.new.amount,
            conversion.new.currency
        );
        Ok(conversion)
    }

    pub async fn validate_iban(&self, iban: &str) -> Result<IbanValidation> {
        let payload = self.api.validate_iban(iban).await?;
        let validation = IbanValidation::from(payload);
        debug!("Validated IBAN, valid = {}", validation.is_valid());
        Ok(validation)
    }

    /// Inflation readings, optionally narrowed to one country and/or indicator type.
    ///
    /// Fails on the first reading whose period does not parse.
    pub async fn fetch_inflation(
        &self,
        country: Option<&InflationCountry>,
        kind: Option<&InflationIndicatorType>,
    ) -> Result<Vec<Inflation>> {
        let payloads = self
            .api
            .get_inflation(country.map(|c| c.raw()), kind.map(|k| k.raw()))
            .await?;

        let readings = payloads
            .into_iter()
            .map(Inflation::from_payload)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!("Fetched {} inflation readings", readings.len());
        Ok(readings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use apininjas_market_data::{ConfigError, Endpoint, MockTransport, TransportError};
    use serde_json::json;

    fn client(transport: &Arc<MockTransport>) -> Client {
        Client::with_transport(transport.clone())
    }

    #[tokio::test]
    async fn test_fetch_stock() {
        let transport = Arc::new(MockTransport::new());
        transport.push_ok(
            Endpoint::Stock,
            json!({
                "ticker": "AAPL",
                "name": "Apple Inc.",
                "exchange": "NASDAQ",
                "price": 192.42,
                "updated": 1706302801
            }),
        );

        let stock = client(&transport).fetch_stock("AAPL").await.unwrap();
        assert_eq!(stock.name(), "Apple Inc.");
        assert_eq!(stock.exchange(), Some("NASDAQ"));
        assert_eq!(stock.price(), 192.42);
    }

    #[tokio::test]
    async fn test_fetch_commodity_routes_gold() {
        let transport = Arc::new(MockTransport::new());
        transport
            .push_ok(Endpoint::Gold, json!({ "price": 2018.3, "updated": 1 }))
            .push_ok(
                Endpoint::Commodity,
                json!({ "name": "Lumber", "exchange": "CME", "price": 540.0, "updated": 2 }),
            );
        let client = client(&transport);

        let gold = client.fetch_commodity(CommodityType::Gold).await.unwrap();
        assert_eq!(gold.name(), "Gold Futures");

        let lumber = client.fetch_commodity(CommodityType::Lumber).await.unwrap();
        assert_eq!(lumber.name(), "Lumber");
        assert_eq!(transport.calls()[1].param("name"), Some("lumber"));
    }

    #[tokio::test]
    async fn test_fetch_unknown_commodity_sends_raw_value() {
        let transport = Arc::new(MockTransport::new());
        transport.push_ok(
            Endpoint::Commodity,
            json!({ "name": "Rapeseed", "exchange": "EURONEXT", "price": 430.0, "updated": 2 }),
        );

        let commodity = client(&transport)
            .fetch_commodity(CommodityType::decode("rapeseed"))
            .await
            .unwrap();
        assert_eq!(commodity.kind().identifier(), "unknown_rapeseed");
        assert_eq!(transport.calls()[0].param("name"), Some("rapeseed"));
    }

    #[tokio::test]
    async fn test_fetch_exchange_rate_builds_currency() {
        let transport = Arc::new(MockTransport::new());
        transport.push_ok(
            Endpoint::ExchangeRate,
            json!({ "currency_pair": "EUR_USD", "exchange_rate": 1.087 }),
        );

        let usd = client(&transport)
            .fetch_exchange_rate("USD", "EUR")
            .await
            .unwrap();
        assert_eq!(usd.name(), "USD");
        assert_eq!(usd.reference(), "EUR");
        assert_eq!(usd.exchange_rate(), 1.087);
        assert_eq!(transport.calls()[0].param("pair"), Some("EUR_USD"));
    }

    #[tokio::test]
    async fn test_validate_iban() {
        let transport = Arc::new(MockTransport::new());
        transport.push_ok(
            Endpoint::Iban,
            json!({
                "iban": "DE89370400440532013000",
                "bank_name": "Commerzbank",
                "account_number": "0532013000",
                "bank_code": "37040044",
                "country": "DE",
                "checksum": "89",
                "bban": "370400440532013000",
                "valid": true
            }),
        );

        let validation = client(&transport)
            .validate_iban("DE89370400440532013000")
            .await
            .unwrap();
        assert!(validation.is_valid());
        assert_eq!(validation.bank_name(), "Commerzbank");
    }

    #[tokio::test]
    async fn test_fetch_inflation_filters_by_raw_values() {
        let transport = Arc::new(MockTransport::new());
        transport.push_ok(
            Endpoint::Inflation,
            json!([{
                "country": "United Kingdom",
                "type": "CPI",
                "period": "Jan 2024",
                "monthly_rate_pct": -0.6,
                "yearly_rate_pct": 4.0
            }]),
        );

        let readings = client(&transport)
            .fetch_inflation(Some(&InflationCountry::UK), Some(&InflationIndicatorType::Cpi))
            .await
            .unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].country(), &InflationCountry::UnitedKingdom);
        assert!(!readings[0].is_monthly_increased());

        let call = &transport.calls()[0];
        assert_eq!(call.param("country"), Some("United Kingdom"));
        assert_eq!(call.param("type"), Some("CPI"));
    }

    #[tokio::test]
    async fn test_fetch_inflation_with_bad_period() {
        let transport = Arc::new(MockTransport::new());
        transport.push_ok(
            Endpoint::Inflation,
            json!([{
                "country": "Germany",
                "type": "CPI",
                "period": "13/2024",
                "monthly_rate_pct": 0.2,
                "yearly_rate_pct": 2.9
            }]),
        );

        let result = client(&transport).fetch_inflation(None, None).await;
        assert!(matches!(result, Err(Error::MalformedPeriod(_))));
    }

    #[tokio::test]
    async fn test_transport_errors_propagate() {
        let transport = Arc::new(MockTransport::new());
        transport.push_err(
            Endpoint::Crypto,
            TransportError::Config(ConfigError::MissingEnvVar("API_NINJAS_KEY".to_string())),
        );

        let result = client(&transport).fetch_crypto("BTCUSDT").await;
        assert!(matches!(
            result,
            Err(Error::Transport(TransportError::Config(_)))
        ));
    }
}
