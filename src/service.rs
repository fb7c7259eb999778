//! Conversion orchestration: validation, cached rate lookup and upstream fetch.

use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::core::{
    Conversion, ConversionError, ConversionResult, Currency, RateCache, RateProvider,
};

/// Converts amounts between supported currencies, reusing cached rates.
///
/// The cache is shared: construct one [`RateCache`] and hand the same `Arc`
/// to every service that should see the same rates.
pub struct ConversionService {
    cache: Arc<RateCache>,
    provider: Arc<dyn RateProvider>,
}

impl ConversionService {
    pub fn new(cache: Arc<RateCache>, provider: Arc<dyn RateProvider>) -> Self {
        Self { cache, provider }
    }

    pub fn cache(&self) -> &Arc<RateCache> {
        &self.cache
    }

    /// Returns the rate for `from -> to`, hitting the provider only on a cache miss.
    #[instrument(name = "GetExchangeRate", skip(self))]
    pub async fn get_exchange_rate(&self, from: &str, to: &str) -> ConversionResult<f64> {
        let (from, to) = parse_pair(from, to)?;
        self.rate(from, to).await
    }

    /// Converts `amount` of `from` into `to`.
    #[instrument(name = "Convert", skip(self))]
    pub async fn convert(&self, amount: f64, from: &str, to: &str) -> ConversionResult<Conversion> {
        if !(amount.is_finite() && amount > 0.0) {
            return Err(ConversionError::InvalidAmount(format!(
                "Amount must be greater than zero, got {amount}"
            )));
        }

        let (from, to) = parse_pair(from, to)?;
        let rate = self.rate(from, to).await?;
        let converted_amount = amount * rate;
        if !converted_amount.is_finite() {
            return Err(ConversionError::Conversion(format!(
                "{amount} {from} cannot be represented in {to}"
            )));
        }

        Ok(Conversion {
            from_currency: from,
            to_currency: to,
            amount,
            converted_amount,
        })
    }

    async fn rate(&self, from: Currency, to: Currency) -> ConversionResult<f64> {
        if let Some(rate) = self.cache.get(from, to).await {
            return Ok(rate);
        }

        // Lock is not held here; concurrent misses for one pair may both fetch.
        let response = self
            .provider
            .fetch_rates(from, to)
            .await
            .map_err(|e| ConversionError::Network(format!("{e:#}")))?;

        if !response.success {
            let reason = response.error.as_deref().unwrap_or("unknown error");
            warn!(%from, %to, reason, "Provider reported failure");
            return Err(ConversionError::UpstreamApi(reason.to_string()));
        }

        let rate = response.rate_for(to).ok_or_else(|| {
            ConversionError::UpstreamApi(format!("Rate not found for {from} to {to}"))
        })?;

        if !(rate.is_finite() && rate > 0.0) {
            return Err(ConversionError::UpstreamApi(format!(
                "Provider returned an invalid rate {rate} for {from} to {to}"
            )));
        }

        self.cache.put(from, to, rate).await?;
        debug!(%from, %to, rate, "Fetched and cached rate");
        Ok(rate)
    }
}

fn parse_pair(from: &str, to: &str) -> ConversionResult<(Currency, Currency)> {
    Ok((from.parse()?, to.parse()?))
}
