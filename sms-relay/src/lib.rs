//! SMS Relay - forwards inbound Twilio SMS to a Telegram chat.
//!
//! ## Architecture
//!
//! ```text
//! Twilio → POST /api/sms → relay_sms() → Telegram sendMessage
//!                 ↓
//!          empty TwiML (always 200)
//! ```

pub mod config;
pub mod error;
pub mod relay;
pub mod sms;
pub mod telegram;
pub mod web;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{Config, Credentials};
pub use error::RelayError;
pub use relay::{relay_sms, RelayOutcome};
pub use sms::{FormFields, InboundBody, SmsEvent};
pub use telegram::{SendMessage, TelegramClient};
pub use web::AppState;
