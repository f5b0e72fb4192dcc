use super::{load_catalog, ui};
use crate::core::{ConverterClient, CurrencyService, UiState};
use anyhow::{Result, bail};

/// Runs a single conversion. `from` and `to` override the configured
/// default selection.
pub async fn run<S: CurrencyService>(
    client: &mut ConverterClient<S>,
    amount: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    load_catalog(client).await?;

    if let Some(code) = from {
        client.select_from(code)?;
    }
    if let Some(code) = to {
        client.select_to(code)?;
    }

    client.on_state_change(ui::spinner_observer(ui::new_spinner("Converting...")));
    if let UiState::ErrorShown(message) = client.submit(amount).await {
        bail!("{message}");
    }

    ui::print_view(&client.view());
    Ok(())
}
