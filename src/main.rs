mod api;
mod config;
mod console;
mod export;
mod utils;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "absenofc_console=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = console::Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    let api = api::ApiClient::new(config.api_url.clone());

    console::run(cli.command, &api, &config).await
}
