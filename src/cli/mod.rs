pub mod convert;
pub mod currencies;
pub mod interactive;
pub mod refresh;
pub mod setup;
pub mod ui;

use crate::core::client::LOAD_FAILURE_MESSAGE;
use crate::core::{ConverterClient, CurrencyService};
use anyhow::Result;
use std::time::Duration;

/// Loads the catalog behind a spinner. A load failure is returned as an
/// error carrying the user-facing message.
pub async fn load_catalog<S: CurrencyService>(client: &mut ConverterClient<S>) -> Result<usize> {
    let pb = ui::new_spinner("Loading currencies...");
    pb.enable_steady_tick(Duration::from_millis(80));
    let loaded = client.load_currencies().await;
    pb.finish_and_clear();

    loaded.map_err(|e| anyhow::Error::new(e).context(LOAD_FAILURE_MESSAGE))
}
