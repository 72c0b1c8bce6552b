mod bot;
mod config;
mod reply;
mod webhook;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::bot::AppState;
use crate::config::{Config, Mode};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,echobot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Values may come from a local .env file in development
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    info!("Configuration loaded successfully");
    info!("  Mode: {:?}", config.mode);

    // Create shared state
    let state = Arc::new(AppState::new(config));

    match state.config.mode {
        Mode::Polling => {
            info!("Starting bot in polling mode...");
            bot::run(state).await?;
        }
        Mode::Webhook => {
            info!("Starting bot in webhook mode...");
            webhook::run(state).await?;
        }
    }

    Ok(())
}
