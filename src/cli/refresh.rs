use super::ui;
use crate::core::{ConverterClient, CurrencyService};
use anyhow::{Context, Result};
use std::time::Duration;

/// Asks the service to refresh its stored exchange rates.
pub async fn run<S: CurrencyService>(
    client: &ConverterClient<S>,
    base_currency: &str,
) -> Result<()> {
    let pb = ui::new_spinner(&format!("Refreshing {base_currency} exchange rates..."));
    pb.enable_steady_tick(Duration::from_millis(80));
    let refreshed = client.refresh_rates(base_currency).await;
    pb.finish_and_clear();

    let message = refreshed.context("Failed to refresh exchange rates")?;
    println!("{}", ui::style_text(&message, ui::StyleType::ResultValue));
    Ok(())
}
