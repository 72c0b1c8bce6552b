use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use teloxide::prelude::*;
use teloxide::types::UpdateKind;
use tracing::{error, info};
use url::Url;

use crate::bot::{self, AppState};

/// Fixed acknowledgement returned for every delivery.
#[derive(Serialize)]
struct Ack {
    status: &'static str,
}

impl Ack {
    fn ok() -> Self {
        Self { status: "OK" }
    }
}

/// Run the webhook transport: register the public URL with Telegram, then
/// serve `POST /webhook` until the process is asked to stop.
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let url = state
        .config
        .webhook_url
        .as_deref()
        .context("Webhook mode requires a webhook URL")?;
    let url = Url::parse(url).with_context(|| format!("Invalid webhook URL: {url}"))?;

    let app = router(state.clone());

    info!("Registering the webhook with Telegram...");
    state
        .bot
        .set_webhook(url)
        .await
        .context("Failed to register the webhook")?;

    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Webhook server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down...");
    state
        .bot
        .delete_webhook()
        .await
        .context("Failed to deregister the webhook")?;

    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/webhook", post(receive_update))
        .with_state(state)
}

/// Telegram pushes one update per request; the body is the same update
/// object long-polling would have returned.
async fn receive_update(
    State(state): State<Arc<AppState>>,
    Json(update): Json<Update>,
) -> Json<Ack> {
    if let UpdateKind::Message(msg) = update.kind {
        if let Err(e) = bot::handle_message(state.bot.clone(), msg).await {
            // Always acknowledge; an error status would make Telegram
            // re-deliver the update.
            error!("Failed to process webhook update: {}", e);
        }
    }

    Json(Ack::ok())
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
