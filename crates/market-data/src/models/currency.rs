use serde::{Deserialize, Serialize};

/// Payload of the exchange rate endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRatePayload {
    /// The requested pair, e.g. `USD_EUR`
    #[serde(default)]
    pub currency_pair: String,
    /// Units of the second currency per unit of the first
    pub exchange_rate: f64,
}

/// Payload of the currency conversion endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConversionPayload {
    pub old_amount: f64,
    pub old_currency: String,
    pub new_amount: f64,
    pub new_currency: String,
}
