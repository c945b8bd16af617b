use std::fmt;
use std::hash::{Hash, Hasher};

use apininjas_market_data::IbanValidationPayload;
use serde::Serialize;

/// Result of validating one IBAN. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct IbanValidation {
    iban: String,
    bank_name: String,
    account_number: String,
    bank_code: String,
    country_code: String,
    checksum: String,
    bban: String,
    valid: bool,
}

impl IbanValidation {
    pub fn iban(&self) -> &str {
        &self.iban
    }

    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn bank_code(&self) -> &str {
        &self.bank_code
    }

    /// ISO 3166 alpha-2 country code.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Basic Bank Account Number.
    pub fn bban(&self) -> &str {
        &self.bban
    }

    /// Whether the IBAN passed validation. Only the checksum is verified.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl From<IbanValidationPayload> for IbanValidation {
    fn from(payload: IbanValidationPayload) -> Self {
        Self {
            iban: payload.iban,
            bank_name: payload.bank_name,
            account_number: payload.account_number,
            bank_code: payload.bank_code,
            country_code: payload.country,
            checksum: payload.checksum,
            bban: payload.bban,
            valid: payload.valid,
        }
    }
}

impl PartialEq for IbanValidation {
    fn eq(&self, other: &Self) -> bool {
        self.iban == other.iban
    }
}

impl Eq for IbanValidation {}

impl Hash for IbanValidation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iban.hash(state);
    }
}

impl fmt::Display for IbanValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iban)
    }
}
