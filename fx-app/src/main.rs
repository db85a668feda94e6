//! # FX Server
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the ledger and rate provider adapters
//! - Create the application services
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fx_hex::{FxServices, inbound::HttpServer};
use fx_provider::FrankfurterClient;
use fx_repo::build_ledger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fx_app=debug,fx_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;

    tracing::info!("Starting FX server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);
    tracing::info!(
        "Rate provider: {} (timeout {:?})",
        config.provider_url,
        config.timeout
    );

    // Build ledger (handles connection and migration)
    let ledger = build_ledger(&config.database_url).await?;
    let rates = FrankfurterClient::new(&config.provider_url, config.timeout)?;

    let services = FxServices::new(rates, ledger);

    let server = HttpServer::new(services);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
