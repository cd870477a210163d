//! Telegram Bot API client.

use std::time::Duration;

use reqwest::Client;
use tracing::info;

use super::types::SendMessage;
use crate::error::RelayError;

/// Thin wrapper around a shared `reqwest::Client` for the Bot API.
///
/// The bot token is passed per call: credentials are resolved per request,
/// not when the client is built.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    api_base: String,
    timeout: Option<Duration>,
}

impl TelegramClient {
    pub fn new(http: Client, api_base: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            timeout,
        }
    }

    fn method_url(&self, bot_token: &str, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, bot_token, method)
    }

    /// Call `sendMessage`. A non-2xx reply is an error.
    pub async fn send_message(
        &self,
        bot_token: &str,
        message: &SendMessage,
    ) -> Result<(), RelayError> {
        let mut request = self
            .http
            .post(self.method_url(bot_token, "sendMessage"))
            .form(message);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let resp = request.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RelayError::Status { status, body });
        }

        info!(
            status_code = status.as_u16(),
            text_length = message.text.len(),
            "telegram_send_complete"
        );

        Ok(())
    }
}
