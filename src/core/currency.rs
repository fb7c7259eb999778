//! Currency, rate key and conversion result types

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use super::error::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "BRL")]
    Brl,
}

impl Currency {
    /// Every currency the converter accepts.
    pub const SUPPORTED: [Currency; 2] = [Currency::Usd, Currency::Brl];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Brl => "BRL",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::SUPPORTED
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| {
                let supported = Currency::SUPPORTED
                    .iter()
                    .map(Currency::code)
                    .collect::<Vec<_>>()
                    .join(", ");
                ConversionError::InvalidCurrency(format!(
                    "Unsupported currency '{s}'. Use one of: {supported}"
                ))
            })
    }
}

/// Ordered currency pair identifying a cached rate. Direction matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RateKey {
    pub from: Currency,
    pub to: Currency,
}

impl RateKey {
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }
}

impl Display for RateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// The outcome of a successful conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub from_currency: Currency,
    pub to_currency: Currency,
    pub amount: f64,
    pub converted_amount: f64,
}

impl Conversion {
    /// Rate implied by the result, for display.
    pub fn effective_rate(&self) -> f64 {
        self.converted_amount / self.amount
    }
}
