use super::{load_catalog, ui};
use crate::core::{ConverterClient, CurrencyService};
use anyhow::Result;

/// Prints the currency catalog offered by the service.
pub async fn run<S: CurrencyService>(client: &mut ConverterClient<S>) -> Result<()> {
    let count = load_catalog(client).await?;

    if count == 0 {
        println!("The currency service did not return any currencies.");
        return Ok(());
    }

    println!(
        "{}\n",
        ui::style_text(&format!("Available currencies ({count})"), ui::StyleType::Title)
    );
    println!("{}", ui::catalog_table(&client.catalog(), client.selection()));
    Ok(())
}
