//! Currency Converter CLI
//!
//! Converts amounts between currencies through a remote conversion API.

mod config;
mod screen;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use converter_client::ConvertClient;
use converter_hex::ConversionController;
use converter_types::domain::request::parse_amount;
use converter_types::{ConversionOutcome, CurrencyCode};

use config::{Config, DEFAULT_TIMEOUT_SECS};
use screen::Screen;

#[derive(Parser)]
#[command(name = "convert")]
#[command(author, version, about = "Currency converter", long_about = None)]
struct Cli {
    /// Base URL of the conversion API
    #[arg(long, env = "CONVERTER_API_URL")]
    api_url: Option<String>,

    /// API key sent in the `apikey` header
    #[arg(long, env = "CONVERTER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Whole-request timeout in seconds
    #[arg(long, env = "CONVERTER_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single amount and exit
    Run {
        /// Amount to convert
        amount: String,
        /// Source currency (USD, EUR, IDR, JPY, GBP)
        #[arg(long, default_value = "USD")]
        from: String,
        /// Target currency (USD, EUR, IDR, JPY, GBP)
        #[arg(long, default_value = "IDR")]
        to: String,
        /// Print the final screen state as JSON
        #[arg(long)]
        json: bool,
    },
    /// List supported currencies
    Currencies,
    /// Open the interactive converter (default)
    Interactive,
}

fn parse_currency(s: &str) -> Result<CurrencyCode> {
    s.parse().map_err(|_| {
        anyhow::anyhow!(
            "Unknown currency: {}. Supported: {}",
            s,
            CurrencyCode::all()
                .iter()
                .map(CurrencyCode::code)
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_controller(config: &Config) -> Result<ConversionController<ConvertClient>> {
    Ok(ConversionController::new(Arc::new(config.client()?)))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let config = Config::new(cli.api_url, cli.api_key, cli.timeout_secs)?;
    tracing::debug!(api_url = %config.api_url, timeout = ?config.timeout, "Loaded configuration");

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Currencies => {
            println!("{}", screen::render_currencies());
        }
        Commands::Run {
            amount,
            from,
            to,
            json,
        } => {
            let mut controller = build_controller(&config)?;
            controller.select_source(parse_currency(&from)?);
            controller.select_target(parse_currency(&to)?);
            controller.set_amount_text(amount.as_str());

            if !controller.submit() {
                // The controller ignores bad input silently; a one-shot run explains why.
                let reason = parse_amount(&amount)
                    .err()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "request not dispatched".into());
                anyhow::bail!("Invalid amount {:?}: {}", amount, reason);
            }
            let outcome = controller.settle().await;
            let state = controller.current_state();

            if json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else if let Some(summary) = state.summary() {
                println!("{}", summary);
            }

            if let Some(ConversionOutcome::Failure { reason }) = outcome {
                eprintln!("✗ Conversion failed: {}", reason);
                std::process::exit(1);
            }
        }
        Commands::Interactive => {
            let controller = build_controller(&config)?;
            screen::run(Screen::new(controller)).await?;
        }
    }

    Ok(())
}
