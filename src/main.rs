mod bot;
mod commands;
mod config;
mod db;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

const DEFAULT_LOG_FILTER: &str = "info,lulucatch_bot=debug";

fn log_filter_from_env(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before the filter reads RUST_LOG
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(log_filter_from_env("RUST_LOG"))
        .with(tracing_subscriber::fmt::layer())
        .init();

    start(Config::from_env()).await
}

/// Run the bot with an already-loaded config. A missing token ends startup
/// before any client is built.
async fn start(loaded: Result<Config>) -> Result<()> {
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Ok(());
        }
    };

    info!("Configuration loaded successfully");
    info!("  Bot token: {}", config.masked_token());

    db::check_connection().await;

    info!("LuLuCatch Bot is starting...");
    bot::run(config).await?;

    Ok(())
}
