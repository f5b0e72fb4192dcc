use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxc::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Currency service URL, overriding the configuration file
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxc::AppCommand {
    fn from(cmd: Commands) -> fxc::AppCommand {
        match cmd {
            Commands::Currencies => fxc::AppCommand::Currencies,
            Commands::Convert { amount, from, to } => fxc::AppCommand::Convert { amount, from, to },
            Commands::Interactive => fxc::AppCommand::Interactive,
            Commands::RefreshRates { base } => fxc::AppCommand::RefreshRates {
                base_currency: base,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List the currencies offered by the service
    Currencies,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Currency to convert from (defaults to the configured one)
        #[arg(short, long)]
        from: Option<String>,
        /// Currency to convert to (defaults to the configured one)
        #[arg(short, long)]
        to: Option<String>,
    },
    /// Start an interactive conversion session
    Interactive,
    /// Ask the service to refresh its exchange rates
    RefreshRates {
        /// Base currency to refresh (defaults to the configured source currency)
        #[arg(long)]
        base: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxc::cli::setup::setup(),
        Some(cmd) => {
            fxc::run_command(cmd.into(), cli.config_path.as_deref(), cli.base_url.as_deref()).await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
