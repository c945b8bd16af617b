use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Price and timestamp taken from one provider payload.
///
/// An instrument swaps the whole snapshot on refresh, so the two fields always
/// come from the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    pub price: f64,
    /// Unix timestamp (seconds) the provider attached to `price`
    pub updated: i64,
}

impl QuoteSnapshot {
    pub fn new(price: f64, updated: i64) -> Self {
        Self { price, updated }
    }

    /// `updated` as a UTC date time, `None` when out of chrono's range.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.updated, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updated_at() {
        let quote = QuoteSnapshot::new(192.42, 1_706_302_801);
        let at = quote.updated_at().unwrap();
        assert_eq!(at.to_rfc3339(), "2024-01-26T21:00:01+00:00");
    }

    #[test]
    fn test_updated_at_out_of_range() {
        assert!(QuoteSnapshot::new(1.0, i64::MAX).updated_at().is_none());
    }
}
