//! Errors raised by the outbound Telegram call.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    /// The request never produced a response (DNS, connect, timeout, ...).
    /// Built with the URL stripped: it carries the bot token.
    #[error("telegram request failed: {0}")]
    Transport(reqwest::Error),

    /// Telegram answered with a non-2xx status.
    #[error("telegram returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        RelayError::Transport(e.without_url())
    }
}

impl RelayError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RelayError::Transport(e) if e.is_timeout())
    }
}
