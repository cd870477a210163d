//! Configuration module for environment variable parsing.
//!
//! Configuration is read once at startup and handed to the web layer as a
//! read-only value. The Telegram credentials are optional: a deployment without
//! them still acknowledges every webhook, it just never relays.

use std::env;
use std::time::Duration;
use tracing::warn;

/// Default Telegram Bot API endpoint.
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Telegram bot token (`TELEGRAM_BOT_TOKEN`)
    pub telegram_bot_token: Option<String>,

    /// Destination chat for relayed messages (`TELEGRAM_CHAT_ID`)
    pub telegram_chat_id: Option<String>,

    /// Base URL of the Bot API, without trailing slash
    pub telegram_api_base: String,

    /// Optional timeout for the sendMessage call
    pub telegram_timeout_ms: Option<u64>,
}

/// Credentials required to relay a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok(),

            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").ok(),

            telegram_api_base: env::var("TELEGRAM_API_BASE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string()),

            telegram_timeout_ms: parse_timeout("TELEGRAM_TIMEOUT_MS"),
        }
    }

    /// Both credentials, or `None` if either is unset or empty.
    pub fn credentials(&self) -> Option<Credentials> {
        let bot_token = non_empty(&self.telegram_bot_token)?;
        let chat_id = non_empty(&self.telegram_chat_id)?;

        Some(Credentials {
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }

    pub fn telegram_timeout(&self) -> Option<Duration> {
        self.telegram_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            telegram_bot_token: None,
            telegram_chat_id: None,
            telegram_api_base: DEFAULT_TELEGRAM_API_BASE.to_string(),
            telegram_timeout_ms: None,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parse an optional millisecond timeout. Zero and garbage are ignored.
fn parse_timeout(name: &str) -> Option<u64> {
    let raw = env::var(name).ok()?;

    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Some(ms),
        _ => {
            warn!(env_var = name, value = %raw, "Invalid timeout, ignoring");
            None
        }
    }
}
