pub mod cli;
pub mod core;
pub mod providers;
pub mod service;

use crate::core::RateCache;
use crate::core::config::AppConfig;
use crate::providers::ExchangeRateApiProvider;
use crate::service::ConversionService;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Commands that need a configured conversion service
pub enum AppCommand {
    Convert {
        amount: f64,
        from: String,
        to: String,
        json: bool,
    },
    Rates,
}

/// Wires the rate cache and HTTP provider described by `config` into a service.
pub fn build_service(config: &AppConfig) -> Result<ConversionService> {
    let cache = Arc::new(RateCache::with_config(config.cache.clone()));
    let provider = Arc::new(ExchangeRateApiProvider::new(&config.provider)?);
    Ok(ConversionService::new(cache, provider))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("cambio starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let service = build_service(&config)?;

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            json,
        } => cli::convert::run(&service, amount, &from, &to, json).await,
        AppCommand::Rates => cli::rates::run(&service).await,
    }
}
