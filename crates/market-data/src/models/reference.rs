use serde::{Deserialize, Serialize};

/// Payload of the IBAN validation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbanValidationPayload {
    pub iban: String,
    pub bank_name: String,
    pub account_number: String,
    pub bank_code: String,
    /// ISO 3166 alpha-2 country code
    pub country: String,
    pub checksum: String,
    pub bban: String,
    /// Result of the IBAN checksum validation only
    pub valid: bool,
}

/// One record of the inflation endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InflationPayload {
    /// Country name, e.g. `Germany`
    pub country: String,
    /// Indicator type, e.g. `CPI` or `HICP`
    #[serde(rename = "type")]
    pub kind: String,
    /// Month and year, e.g. `Jan 2024`
    pub period: String,
    pub monthly_rate_pct: f64,
    pub yearly_rate_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inflation_type_field() {
        let payload: InflationPayload = serde_json::from_value(json!({
            "country": "Germany",
            "type": "HICP",
            "period": "Dec 2023",
            "monthly_rate_pct": 0.2,
            "yearly_rate_pct": 3.8
        }))
        .unwrap();
        assert_eq!(payload.kind, "HICP");
        assert_eq!(payload.period, "Dec 2023");
    }

    #[test]
    fn test_iban_payload_missing_field_fails() {
        let result: Result<IbanValidationPayload, _> = serde_json::from_value(json!({
            "iban": "DE16200700000532013000",
            "valid": true
        }));
        assert!(result.is_err());
    }
}
