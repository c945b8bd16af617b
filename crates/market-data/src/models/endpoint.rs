use std::fmt;

use serde::{Deserialize, Serialize};

/// A named remote operation of the finance API.
///
/// Every endpoint maps to a fixed path relative to the provider base URL.
/// The path doubles as the display form used in errors and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Latest stock price by ticker.
    Stock,
    /// Latest gold futures price.
    Gold,
    /// Latest commodity futures price by commodity name.
    Commodity,
    /// Latest cryptocurrency price by symbol.
    Crypto,
    /// All cryptocurrency symbols known to the provider.
    CryptoSymbols,
    /// Exchange rate for a currency pair.
    ExchangeRate,
    /// Conversion of an amount between two currencies.
    ConvertCurrency,
    /// IBAN validation.
    Iban,
    /// Inflation indicators, optionally filtered by country and type.
    Inflation,
}

impl Endpoint {
    /// All endpoints, in declaration order.
    pub const ALL: [Endpoint; 9] = [
        Endpoint::Stock,
        Endpoint::Gold,
        Endpoint::Commodity,
        Endpoint::Crypto,
        Endpoint::CryptoSymbols,
        Endpoint::ExchangeRate,
        Endpoint::ConvertCurrency,
        Endpoint::Iban,
        Endpoint::Inflation,
    ];

    /// Path relative to the provider base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Stock => "stockprice",
            Self::Gold => "goldprice",
            Self::Commodity => "commodityprice",
            Self::Crypto => "cryptoprice",
            Self::CryptoSymbols => "cryptosymbols",
            Self::ExchangeRate => "exchangerate",
            Self::ConvertCurrency => "convertcurrency",
            Self::Iban => "iban",
            Self::Inflation => "inflation",
        }
    }

    /// Whether the endpoint answers with a list rather than a single record.
    pub const fn returns_list(self) -> bool {
        matches!(self, Self::Inflation)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        assert_eq!(paths.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_display_is_path() {
        assert_eq!(Endpoint::Stock.to_string(), "stockprice");
        assert_eq!(Endpoint::ConvertCurrency.to_string(), "convertcurrency");
    }

    #[test]
    fn test_only_inflation_returns_list() {
        for endpoint in Endpoint::ALL {
            assert_eq!(endpoint.returns_list(), endpoint == Endpoint::Inflation);
        }
    }
}
