use super::ui;
use crate::core::Conversion;
use crate::service::ConversionService;
use anyhow::{Context, Result};

impl Conversion {
    pub fn display(&self) -> String {
        let converted = format!("{:.2} {}", self.converted_amount, self.to_currency);
        format!(
            "{:.2} {} = {}\n{}",
            self.amount,
            self.from_currency,
            ui::style_text(&converted, ui::StyleType::Value),
            ui::style_text(
                &format!(
                    "1 {} = {:.4} {}",
                    self.from_currency,
                    self.effective_rate(),
                    self.to_currency
                ),
                ui::StyleType::Subtle
            )
        )
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize conversion")
    }
}

pub async fn run(
    service: &ConversionService,
    amount: f64,
    from: &str,
    to: &str,
    json: bool,
) -> Result<()> {
    let conversion = service.convert(amount, from, to).await?;
    if json {
        println!("{}", conversion.to_json()?);
    } else {
        println!("{}", conversion.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Currency;

    #[test]
    fn test_display_conversion() {
        console::set_colors_enabled(false);
        let conversion = Conversion {
            from_currency: Currency::Usd,
            to_currency: Currency::Brl,
            amount: 100.0,
            converted_amount: 487.1265,
        };

        let output = conversion.display();
        assert!(output.contains("100.00 USD = 487.13 BRL"));
        assert!(output.contains("1 USD = 4.8713 BRL"));
    }

    #[test]
    fn test_conversion_json_uses_currency_codes() -> Result<()> {
        let conversion = Conversion {
            from_currency: Currency::Brl,
            to_currency: Currency::Usd,
            amount: 50.0,
            converted_amount: 10.0,
        };

        let value: serde_json::Value = serde_json::from_str(&conversion.to_json()?)?;
        assert_eq!(
            value,
            serde_json::json!({
                "from_currency": "BRL",
                "to_currency": "USD",
                "amount": 50.0,
                "converted_amount": 10.0
            })
        );
        Ok(())
    }
}
