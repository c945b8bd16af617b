//! Typed access to the finance endpoints.
//!
//! [`FinanceApi`] sits on top of any [`Transport`] and turns the raw JSON
//! answers into payload records. It is cheap to clone; every clone shares the
//! same transport.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::TransportError;
use crate::models::{
    CommodityPayload, CryptoPayload, CryptoSymbolsPayload, CurrencyConversionPayload, Endpoint,
    ExchangeRatePayload, GoldPayload, IbanValidationPayload, InflationPayload, QueryParams,
    StockPayload,
};
use crate::transport::Transport;

#[derive(Clone)]
pub struct FinanceApi {
    transport: Arc<dyn Transport>,
}

impl FinanceApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &QueryParams,
    ) -> Result<T, TransportError> {
        let body = self.transport.get(endpoint, params).await?;
        decode(endpoint, body)
    }

    pub async fn get_stock(&self, ticker: &str) -> Result<StockPayload, TransportError> {
        self.fetch(Endpoint::Stock, &[("ticker", ticker.to_string())])
            .await
    }

    pub async fn get_gold(&self) -> Result<GoldPayload, TransportError> {
        self.fetch(Endpoint::Gold, &[]).await
    }

    /// Latest price of a commodity future by its provider name, e.g. `platinum`.
    pub async fn get_commodity(&self, name: &str) -> Result<CommodityPayload, TransportError> {
        self.fetch(Endpoint::Commodity, &[("name", name.to_string())])
            .await
    }

    pub async fn get_crypto(&self, symbol: &str) -> Result<CryptoPayload, TransportError> {
        self.fetch(Endpoint::Crypto, &[("symbol", symbol.to_string())])
            .await
    }

    pub async fn get_crypto_symbols(&self) -> Result<Vec<String>, TransportError> {
        let payload: CryptoSymbolsPayload = self.fetch(Endpoint::CryptoSymbols, &[]).await?;
        Ok(payload.symbols)
    }

    /// Exchange rate for a pair written as `FROM_TO`, e.g. `USD_EUR`.
    pub async fn get_exchange_rate(
        &self,
        pair: &str,
    ) -> Result<ExchangeRatePayload, TransportError> {
        self.fetch(Endpoint::ExchangeRate, &[("pair", pair.to_string())])
            .await
    }

    pub async fn convert_currency(
        &self,
        amount: f64,
        have: &str,
        want: &str,
    ) -> Result<CurrencyConversionPayload, TransportError> {
        self.fetch(
            Endpoint::ConvertCurrency,
            &[
                ("have", have.to_string()),
                ("want", want.to_string()),
                ("amount", amount.to_string()),
            ],
        )
        .await
    }

    pub async fn validate_iban(&self, iban: &str) -> Result<IbanValidationPayload, TransportError> {
        self.fetch(Endpoint::Iban, &[("iban", iban.to_string())])
            .await
    }

    /// Inflation records, optionally narrowed to one country and/or indicator type.
    pub async fn get_inflation(
        &self,
        country: Option<&str>,
        kind: Option<&str>,
    ) -> Result<Vec<InflationPayload>, TransportError> {
        let mut params = Vec::with_capacity(2);
        if let Some(country) = country {
            params.push(("country", country.to_string()));
        }
        if let Some(kind) = kind {
            params.push(("type", kind.to_string()));
        }
        self.fetch(Endpoint::Inflation, &params).await
    }
}

impl fmt::Debug for FinanceApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinanceApi").finish_non_exhaustive()
    }
}

/// Decode an endpoint's JSON body into its payload record.
///
/// Single-record endpoints answer an unknown key with an empty object or
/// array; that becomes [`TransportError::NotFound`]. A one-element array is
/// unwrapped.
pub fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: Value) -> Result<T, TransportError> {
    let body = if endpoint.returns_list() {
        body
    } else {
        match body {
            Value::Array(mut items) if items.len() == 1 => items.remove(0),
            Value::Array(items) if items.is_empty() => {
                return Err(TransportError::NotFound { endpoint })
            }
            Value::Object(map) if map.is_empty() => {
                return Err(TransportError::NotFound { endpoint })
            }
            Value::Null => return Err(TransportError::NotFound { endpoint }),
            other => other,
        }
    };

    serde_json::from_value(body).map_err(|e| TransportError::Decode {
        endpoint,
        message: e.to_string(),
    })
}
