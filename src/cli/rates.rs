use super::ui;
use crate::core::{ConversionResult, Currency, RateKey};
use crate::service::ConversionService;
use anyhow::Result;
use comfy_table::Cell;
use futures::future::join_all;

/// Every ordered pair of distinct supported currencies.
pub fn supported_pairs() -> Vec<RateKey> {
    Currency::SUPPORTED
        .into_iter()
        .flat_map(|from| {
            Currency::SUPPORTED
                .into_iter()
                .filter(move |to| *to != from)
                .map(move |to| RateKey::new(from, to))
        })
        .collect()
}

pub fn rates_table(rates: &[(RateKey, ConversionResult<f64>)]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("From"),
        ui::header_cell("To"),
        ui::header_cell("Rate"),
    ]);

    for (key, rate) in rates {
        let rate_cell = match rate {
            Ok(rate) => ui::rate_cell(*rate),
            Err(e) => ui::error_cell(&e.to_string()),
        };
        table.add_row(vec![
            Cell::new(key.from.code()),
            Cell::new(key.to.code()),
            rate_cell,
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Exchange rates", ui::StyleType::Title),
        table
    )
}

/// Fetches every supported pair concurrently and prints them as a table.
pub async fn run(service: &ConversionService) -> Result<()> {
    let pairs = supported_pairs();
    let results = join_all(pairs.iter().map(|key| {
        let from = key.from.code();
        let to = key.to.code();
        async move { service.get_exchange_rate(from, to).await }
    }))
    .await;

    let rates = pairs.into_iter().zip(results).collect::<Vec<_>>();
    println!("{}", rates_table(&rates));

    if let Some((_, Err(e))) = rates.iter().find(|(_, rate)| rate.is_err()) {
        anyhow::bail!("Failed to fetch all rates: {e}");
    }
    Ok(())
}
