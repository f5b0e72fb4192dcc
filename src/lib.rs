pub mod cli;
pub mod core;
pub mod providers;

use crate::core::ConverterClient;
use crate::core::config::AppConfig;
use crate::providers::HttpCurrencyService;
use anyhow::Result;
use tracing::{debug, info};

/// A command runnable against the currency service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Currencies,
    Convert {
        amount: String,
        from: Option<String>,
        to: Option<String>,
    },
    Interactive,
    RefreshRates {
        base_currency: Option<String>,
    },
}

/// Loads the configuration, connects to the service and runs `command`.
///
/// `base_url` overrides the service URL from the configuration file.
pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    base_url: Option<&str>,
) -> Result<()> {
    info!("Currency converter starting...");

    let mut config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    if let Some(url) = base_url {
        config.base_url = url.to_string();
    }
    debug!("Loaded config: {config:#?}");

    let service = HttpCurrencyService::new(&config.base_url)?;
    let mut client =
        ConverterClient::new(service).with_defaults(&config.default_from, &config.default_to);

    match command {
        AppCommand::Currencies => cli::currencies::run(&mut client).await,
        AppCommand::Convert { amount, from, to } => {
            cli::convert::run(&mut client, &amount, from.as_deref(), to.as_deref()).await
        }
        AppCommand::Interactive => cli::interactive::run(&mut client).await,
        AppCommand::RefreshRates { base_currency } => {
            let base = base_currency.unwrap_or_else(|| config.default_from.clone());
            cli::refresh::run(&client, &base).await
        }
    }
}
