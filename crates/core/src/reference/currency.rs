use std::fmt;
use std::hash::{Hash, Hasher};

use apininjas_market_data::{CurrencyConversionPayload, FinanceApi};

use crate::errors::{Error, Result};
use crate::snapshot::{RefreshState, SnapshotCell};

/// A currency priced against a reference currency.
///
/// `exchange_rate` is the amount of this currency one unit of the reference
/// buys, i.e. the rate of the `{reference}_{name}` pair.
#[derive(Debug)]
pub struct Currency {
    api: FinanceApi,
    name: String,
    reference: String,
    exchange_rate: SnapshotCell<f64>,
}

impl Currency {
    pub fn new(
        api: FinanceApi,
        name: impl Into<String>,
        reference: impl Into<String>,
        exchange_rate: f64,
    ) -> Self {
        Self {
            api,
            name: name.into(),
            reference: reference.into(),
            exchange_rate: SnapshotCell::new(exchange_rate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn exchange_rate(&self) -> f64 {
        self.exchange_rate.get()
    }

    /// Pair key the provider uses for this currency, reference first.
    pub fn pair(&self) -> String {
        format!("{}_{}", self.reference, self.name)
    }

    /// Whether this currency is worth more than its reference.
    pub fn is_stronger(&self) -> bool {
        self.exchange_rate() < 1.0
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.exchange_rate.state()
    }

    /// Fetches the current rate and replaces the held one.
    ///
    /// On failure the previous rate is kept.
    pub async fn refresh(&self) -> Result<f64> {
        let pair = self.pair();
        self.exchange_rate
            .refresh_with(async {
                let payload = self.api.get_exchange_rate(&pair).await?;
                Ok::<_, Error>(payload.exchange_rate)
            })
            .await
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.reference == other.reference
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.reference.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One side of a conversion.
#[derive(Debug, PartialEq)]
pub struct CurrencyWithAmount {
    pub currency: Currency,
    pub amount: f64,
}

/// Result of converting an amount from one currency into another.
///
/// Each side's currency uses the other side as its reference.
#[derive(Debug, PartialEq)]
pub struct CurrencyConversion {
    pub old: CurrencyWithAmount,
    pub new: CurrencyWithAmount,
}

impl CurrencyConversion {
    pub fn from_payload(api: FinanceApi, payload: CurrencyConversionPayload) -> Result<Self> {
        let CurrencyConversionPayload {
            old_amount,
            old_currency,
            new_amount,
            new_currency,
        } = payload;

        if !is_usable_amount(old_amount) || !is_usable_amount(new_amount) {
            return Err(Error::InvalidData(format!(
                "conversion {} {} -> {} {} has no usable rate",
                old_amount, old_currency, new_amount, new_currency
            )));
        }

        let old = Currency::new(
            api.clone(),
            old_currency.clone(),
            new_currency.clone(),
            old_amount / new_amount,
        );
        let new = Currency::new(api, new_currency, old_currency, new_amount / old_amount);

        Ok(Self {
            old: CurrencyWithAmount {
                currency: old,
                amount: old_amount,
            },
            new: CurrencyWithAmount {
                currency: new,
                amount: new_amount,
            },
        })
    }
}

fn is_usable_amount(amount: f64) -> bool {
    amount.is_finite() && amount != 0.0
}
