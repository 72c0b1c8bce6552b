use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use teloxide::prelude::*;
use tracing::{info, warn};

use crate::config::Config;
use crate::reply;

/// Shared application state, created once and handed to the active transport.
pub struct AppState {
    pub bot: Bot,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let bot = Bot::new(&config.bot_token);
        Self { bot, config }
    }
}

/// Sender first name and message text, when the update carries both.
pub fn sender_and_text(msg: &Message) -> Option<(String, String)> {
    let name = msg.from.as_ref()?.first_name.clone();
    let text = msg.text()?.to_string();
    Some((name, text))
}

/// Start the long-polling transport; runs until the process is terminated.
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let bot = state.bot.clone();

    info!("Starting Telegram long-polling...");

    let handler = Update::filter_message()
        .filter_map(|msg: Message| {
            // Subscribe to text messages only
            msg.text()?;
            Some(msg)
        })
        .endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("bot"))
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Echo one text message back to its chat. Both transports end up here.
pub async fn handle_message(bot: Bot, msg: Message) -> ResponseResult<()> {
    let (name, text) = match sender_and_text(&msg) {
        Some(parts) => parts,
        None => return Ok(()),
    };

    info!("Text message received from {}", name);

    let reply = reply::format_reply(&name, &text, Utc::now());
    bot.send_message(msg.chat.id, reply).await?;

    Ok(())
}
