use serde::{Deserialize, Serialize};

/// Payload of the stock price endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockPayload {
    /// Ticker symbol, e.g. `AAPL`
    pub ticker: String,
    /// Company name
    pub name: String,
    /// Exchange name, or a synthetic bucket such as `COMMODITY`/`CRYPTO`
    pub exchange: String,
    /// Latest price
    pub price: f64,
    /// Unix timestamp of the price
    pub updated: i64,
}

/// Payload of the gold price endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoldPayload {
    /// Latest price
    pub price: f64,
    /// Unix timestamp of the price
    pub updated: i64,
}

/// Payload of the commodity price endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommodityPayload {
    /// Name of the commodity future, e.g. `Platinum`
    pub name: String,
    /// Exchange the future is traded on
    pub exchange: String,
    /// Latest price
    pub price: f64,
    /// Unix timestamp of the price
    pub updated: i64,
}

/// Payload of the crypto price endpoint.
///
/// The provider sends `price` as a numeric string; a JSON number is accepted too.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CryptoPayload {
    /// Trading pair symbol, e.g. `BTCUSDT`
    pub symbol: String,
    /// Latest price
    #[serde(
        deserialize_with = "numeric_input::deserialize_f64",
        serialize_with = "numeric_input::serialize_f64"
    )]
    pub price: f64,
    /// Unix timestamp of the price
    pub timestamp: i64,
}

/// Payload of the crypto symbols endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoSymbolsPayload {
    pub symbols: Vec<String>,
}

mod numeric_input {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use serde_json::Number;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumericInput {
        String(String),
        Number(Number),
    }

    fn parse_f64(value: &str) -> Result<f64, String> {
        value
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid numeric value '{}': {}", value, e))
    }

    pub fn deserialize_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumericInput::deserialize(deserializer)? {
            NumericInput::String(s) => parse_f64(&s).map_err(serde::de::Error::custom),
            NumericInput::Number(n) => n
                .as_f64()
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid numeric value '{}'", n))),
        }
    }

    pub fn serialize_f64<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}
