use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::core::config::ProviderConfig;
use crate::core::{Currency, RateProvider, RatesResponse};

/// Rate provider backed by the exchangerate-api.com `latest` endpoint.
pub struct ExchangeRateApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl ExchangeRateApiProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("cambio/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(name = "ExchangeRateFetch", skip(self), fields(base = %base, symbol = %symbol))]
    async fn fetch_rates(&self, base: Currency, symbol: Currency) -> Result<RatesResponse> {
        let url = format!("{}/v4/latest/{}?symbols={}", self.base_url, base, symbol);
        debug!("Requesting rates from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base currency: {}", e, base))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                base
            ));
        }

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read rates response for {base}"))?;

        let data: RatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response for {}: {}", base, e))?;

        debug!(success = data.success, rates = data.rates.len(), "Received rates");
        Ok(data)
    }
}
