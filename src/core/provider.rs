//! Upstream rate source abstraction

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

use super::currency::Currency;

fn default_success() -> bool {
    true
}

/// Rates quoted against a single base currency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatesResponse {
    /// Defaults to `true` when absent: the public v4 endpoint only sends the
    /// flag alongside an error, so a missing flag is a successful response
    /// rather than a parse failure.
    #[serde(default = "default_success")]
    pub success: bool,
    pub base: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub rates: HashMap<String, f64>,
    pub error: Option<String>,
}

impl RatesResponse {
    pub fn rate_for(&self, currency: Currency) -> Option<f64> {
        self.rates.get(currency.code()).copied()
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches rates for `base`, asking for `symbol` only.
    ///
    /// Implementations own their timeouts. An `Err` means the response never
    /// arrived or could not be read.
    async fn fetch_rates(&self, base: Currency, symbol: Currency) -> Result<RatesResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_response() {
        let json = r#"{
            "success": true,
            "timestamp": 1700000000,
            "base": "USD",
            "date": "2023-11-14",
            "rates": { "BRL": 4.91 }
        }"#;
        let response: RatesResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.rate_for(Currency::Brl), Some(4.91));
        assert_eq!(response.rate_for(Currency::Usd), None);
        assert_eq!(response.date.as_deref(), Some("2023-11-14"));
    }

    #[test]
    fn test_deserialize_v4_response_without_success_flag() {
        let json = r#"{
            "provider": "https://www.exchangerate-api.com",
            "base": "BRL",
            "date": "2024-01-02",
            "time_last_updated": 1704153601,
            "rates": { "BRL": 1, "USD": 0.2052 }
        }"#;
        let response: RatesResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.base.as_deref(), Some("BRL"));
        assert_eq!(response.rate_for(Currency::Usd), Some(0.2052));
    }

    #[test]
    fn test_deserialize_error_response() {
        let json = r#"{ "success": false, "error": "invalid_access_key" }"#;
        let response: RatesResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.rates.is_empty());
        assert_eq!(response.error.as_deref(), Some("invalid_access_key"));
    }
}
