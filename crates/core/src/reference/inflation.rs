use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use apininjas_market_data::InflationPayload;
use chrono::{Datelike, Month, NaiveDate};

use crate::categorical::{InflationCountry, InflationIndicatorType};
use crate::errors::MalformedPeriodError;

/// Calendar month an inflation reading belongs to, e.g. `Jan 2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    first_day: NaiveDate,
}

impl Period {
    pub fn new(year: i32, month: Month) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
            .map(|first_day| Self { first_day })
    }

    /// Parses a three-letter month abbreviation and a four-digit year.
    pub fn parse(raw: &str) -> Result<Self, MalformedPeriodError> {
        let malformed = || MalformedPeriodError::new(raw);

        let (month, year) = raw.split_once(' ').ok_or_else(malformed)?;
        if month.len() != 3 || !month.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(malformed());
        }
        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }

        let month = Month::from_str(month).map_err(|_| malformed())?;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        Self::new(year, month).ok_or_else(malformed)
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Month number, 1 to 12.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }
}

impl FromStr for Period {
    type Err = MalformedPeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%b %Y"))
    }
}

/// One inflation reading for a country and indicator type.
///
/// The period is parsed when the reading is built, so a malformed period
/// fails construction instead of a later comparison.
#[derive(Debug, Clone)]
pub struct Inflation {
    country: InflationCountry,
    kind: InflationIndicatorType,
    monthly_rate: f64,
    yearly_rate: f64,
    raw_period: String,
    period: Period,
}

impl Inflation {
    pub fn from_payload(payload: InflationPayload) -> Result<Self, MalformedPeriodError> {
        let period = Period::parse(&payload.period)?;

        Ok(Self {
            country: InflationCountry::decode(&payload.country),
            kind: InflationIndicatorType::decode(&payload.kind),
            monthly_rate: payload.monthly_rate_pct,
            yearly_rate: payload.yearly_rate_pct,
            raw_period: payload.period,
            period,
        })
    }

    pub fn country(&self) -> &InflationCountry {
        &self.country
    }

    pub fn kind(&self) -> &InflationIndicatorType {
        &self.kind
    }

    /// Month-over-month rate, in percent.
    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }

    /// Year-over-year rate, in percent.
    pub fn yearly_rate(&self) -> f64 {
        self.yearly_rate
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// The period as the provider spelled it.
    pub fn raw_period(&self) -> &str {
        &self.raw_period
    }

    pub fn is_monthly_increased(&self) -> bool {
        self.monthly_rate > 0.0
    }

    pub fn is_yearly_increased(&self) -> bool {
        self.yearly_rate > 0.0
    }
}

impl PartialEq for Inflation {
    fn eq(&self, other: &Self) -> bool {
        self.country == other.country && self.kind == other.kind && self.period == other.period
    }
}

impl Eq for Inflation {}

impl Hash for Inflation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.country.hash(state);
        self.kind.hash(state);
        self.period.hash(state);
    }
}

impl fmt::Display for Inflation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.country, self.kind, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(
        country: &str,
        kind: &str,
        period: &str,
        monthly: f64,
        yearly: f64,
    ) -> Result<Inflation, MalformedPeriodError> {
        Inflation::from_payload(InflationPayload {
            country: country.to_string(),
            kind: kind.to_string(),
            period: period.to_string(),
            monthly_rate_pct: monthly,
            yearly_rate_pct: yearly,
        })
    }

    #[test]
    fn test_parse_period() {
        let period = Period::parse("Jan 2024").unwrap();
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 1);
        assert_eq!(period.to_string(), "Jan 2024");
        assert_eq!(Period::parse("Dec 1999").unwrap().month(), 12);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["13/2024", "January 2024", "Jan 24", "Jan  2024", "Foo 2024", "", "2024 Jan"] {
            assert_eq!(
                Period::parse(raw),
                Err(MalformedPeriodError::new(raw)),
                "accepted {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_periods_order_by_date() {
        let dec: Period = "Dec 2023".parse().unwrap();
        let jan: Period = "Jan 2024".parse().unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn test_from_payload() {
        let inflation = reading("Germany", "CPI", "Jan 2024", 0.2, 2.9).unwrap();
        assert_eq!(inflation.country(), &InflationCountry::Germany);
        assert_eq!(inflation.kind(), &InflationIndicatorType::Cpi);
        assert_eq!(inflation.period(), Period::new(2024, Month::January).unwrap());
        assert_eq!(inflation.raw_period(), "Jan 2024");
        assert!(inflation.is_monthly_increased());
        assert!(inflation.is_yearly_increased());
        assert_eq!(inflation.to_string(), "Germany CPI Jan 2024");
    }

    #[test]
    fn test_malformed_period_fails_construction() {
        let err = reading("Germany", "CPI", "13/2024", 0.2, 2.9).unwrap_err();
        assert_eq!(err.raw, "13/2024");
    }

    #[test]
    fn test_unknown_categories_are_kept() {
        let inflation = reading("Atlantis", "PPI", "Feb 2024", -0.1, 0.0).unwrap();
        assert_eq!(inflation.country().identifier(), "unknown_Atlantis");
        assert_eq!(inflation.kind().raw(), "PPI");
        assert!(!inflation.is_monthly_increased());
        assert!(!inflation.is_yearly_increased());
    }

    #[test]
    fn test_equality_ignores_rates_and_resolves_aliases() {
        let a = reading("United States", "CPI", "Jan 2024", 0.3, 3.1).unwrap();
        let b = reading("USA", "CPI", "Jan 2024", 0.4, 3.2).unwrap();
        let c = reading("United States", "CPI", "Feb 2024", 0.3, 3.1).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
