//! FX CLI
//!
//! Converts amounts, lists recent conversions and charts rate trends from the
//! terminal. Runs the services in-process against the Frankfurter API and a
//! local SQLite ledger.

mod render;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use fx_hex::{ConversionService, CurrencyCatalog, TrendQuery};
use fx_provider::{DEFAULT_BASE_URL, FrankfurterClient};
use fx_repo::build_ledger;
use fx_types::{CurrencyCode, CurrencyListResponse, TrendResponse};

#[derive(Parser)]
#[command(name = "fx")]
#[command(author, version, about = "Currency converter and rate trends", long_about = None)]
struct Cli {
    /// SQLite database holding the conversion history
    #[arg(
        long,
        global = true,
        env = "FX_DATABASE_URL",
        default_value = "sqlite://conversions.db?mode=rwc"
    )]
    database: String,

    /// Base URL of the exchange-rate provider
    #[arg(long, global = true, env = "FX_PROVIDER_URL", default_value = DEFAULT_BASE_URL)]
    provider_url: String,

    /// Provider request timeout in seconds
    #[arg(long, global = true, env = "FX_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable currencies
    Currencies,
    /// Convert an amount at the latest rate and record it
    Convert {
        /// Base currency (defaults to USD)
        #[arg(long)]
        from: Option<CurrencyCode>,
        /// Target currency (defaults to INR)
        #[arg(long)]
        to: Option<CurrencyCode>,
        #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// Show the most recent conversions, newest first
    History,
    /// Chart the daily rate between two dates
    Trend {
        #[arg(long)]
        from: Option<CurrencyCode>,
        #[arg(long)]
        to: Option<CurrencyCode>,
        /// First day of the range (YYYY-MM-DD)
        #[arg(long, default_value = "2024-01-01")]
        start: NaiveDate,
        /// Last day of the range (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Maximum bar width in characters
        #[arg(long, default_value_t = 40)]
        width: usize,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(provider = %cli.provider_url, database = %cli.database, "starting");

    let rates = Arc::new(FrankfurterClient::new(
        &cli.provider_url,
        Duration::from_secs(cli.timeout_secs),
    )?);
    let catalog = CurrencyCatalog::new(rates.clone());
    let (default_base, default_target) = catalog.default_pair();

    match cli.command {
        Commands::Currencies => {
            let listing = catalog.list().await;
            if cli.json {
                let body = CurrencyListResponse::from(listing);
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{}", render::currencies(&listing));
            }
        }

        Commands::Convert { from, to, amount } => {
            let ledger = build_ledger(&cli.database).await?;
            let service = ConversionService::new(rates, ledger);
            let base = from.unwrap_or(default_base);
            let target = to.unwrap_or(default_target);

            let record = service.convert(&base, &target, amount).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", render::conversion(&record));
            }
        }

        Commands::History => {
            let ledger = build_ledger(&cli.database).await?;
            let service = ConversionService::new(rates, ledger);

            let records = service.recent().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("{}", render::history(&records));
            }
        }

        Commands::Trend {
            from,
            to,
            start,
            end,
            width,
        } => {
            let trends = TrendQuery::new(rates);
            let base = from.unwrap_or(default_base);
            let target = to.unwrap_or(default_target);
            let end = end.unwrap_or_else(|| chrono::Local::now().date_naive());

            let trend = trends.fetch_trend(&base, &target, start, end).await?;
            if cli.json {
                let body = TrendResponse::from(trend);
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{}", render::trend_chart(&trend, width));
            }
        }
    }

    Ok(())
}
