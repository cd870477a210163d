//! Relay core: one inbound SMS in, at most one Telegram message out.
//!
//! ## Flow
//!
//! ```text
//! InboundBody → FormFields → SmsEvent → sendMessage
//! ```
//!
//! The caller resolves credentials first; without them nothing here runs.
//! The outbound call is a best-effort side effect. Its result is reported as a
//! [`RelayOutcome`] for logging and never reaches the webhook response.

use tracing::{error, info, warn};

use crate::config::Credentials;
use crate::sms::{InboundBody, SmsEvent};
use crate::telegram::{SendMessage, TelegramClient};

/// What happened to an inbound SMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Bot token or chat id missing; body left unread.
    NotConfigured,
    /// The body could not be read.
    BodyUnreadable,
    /// Telegram accepted the message.
    Delivered,
    /// The sendMessage call failed; the error has been logged.
    Failed,
}

impl RelayOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelayOutcome::NotConfigured => "not_configured",
            RelayOutcome::BodyUnreadable => "body_unreadable",
            RelayOutcome::Delivered => "delivered",
            RelayOutcome::Failed => "failed",
        }
    }
}

/// Forward one inbound SMS to the credentials' Telegram chat.
pub async fn relay_sms(
    telegram: &TelegramClient,
    credentials: &Credentials,
    body: InboundBody,
) -> RelayOutcome {
    let fields = match body.into_fields().await {
        Ok(fields) => fields,
        Err(e) => {
            warn!(error = %e, "sms_body_read_failed");
            return RelayOutcome::BodyUnreadable;
        }
    };

    let event = SmsEvent::from_fields(&fields);
    info!(
        from = %event.from,
        to = %event.to,
        body_length = event.body.len(),
        field_count = fields.len(),
        "sms_event_extracted"
    );

    let message = SendMessage::new(credentials.chat_id.as_str(), event.compose_text());

    match telegram.send_message(&credentials.bot_token, &message).await {
        Ok(()) => RelayOutcome::Delivered,
        Err(e) => {
            error!(
                error = %e,
                is_timeout = e.is_timeout(),
                from = %event.from,
                "telegram_send_failed"
            );
            RelayOutcome::Failed
        }
    }
}
