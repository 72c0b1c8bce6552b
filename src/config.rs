use anyhow::{Context, Result};

/// Transport through which the bot receives updates, fixed at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Polling,
    Webhook,
}

impl Mode {
    /// `"production"` (any casing) runs behind the webhook; everything else polls.
    fn from_environment(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Mode::Webhook
        } else {
            Mode::Polling
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub mode: Mode,
    /// Public URL registered with Telegram; only present in webhook mode.
    pub webhook_url: Option<String>,
}

impl Config {
    /// Read the configuration from the process environment, once.
    pub fn from_env() -> Result<Self> {
        let bot_token =
            std::env::var("TELEGRAM_TOKEN").context("TELEGRAM_TOKEN is not set")?;

        let mode =
            Mode::from_environment(&std::env::var("ENVIRONMENT").unwrap_or_default());

        let webhook_url = match mode {
            Mode::Webhook => Some(
                std::env::var("WEBHOOK_URL")
                    .context("WEBHOOK_URL is not set (required in webhook mode)")?,
            ),
            Mode::Polling => None,
        };

        Ok(Self {
            bot_token,
            mode,
            webhook_url,
        })
    }
}
