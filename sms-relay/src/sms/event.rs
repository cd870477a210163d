//! The inbound SMS event and the Telegram text built from it.

use super::body::FormFields;

/// Placeholder sender when Twilio omits `From`.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// Fields of an inbound Twilio SMS that get relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsEvent {
    pub from: String,
    pub to: String,
    pub body: String,
}

impl SmsEvent {
    /// Read `From`, `To` and `Body`. Absent or empty values take their defaults.
    pub fn from_fields(fields: &FormFields) -> Self {
        let field = |key: &str, default: &str| {
            fields
                .get(key)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        SmsEvent {
            from: field("From", UNKNOWN_SENDER),
            to: field("To", ""),
            body: field("Body", ""),
        }
    }

    /// Text sent to the Telegram chat.
    pub fn compose_text(&self) -> String {
        format!("📩 SMS to {}\nFrom: {}\n\n{}", self.to, self.from, self.body)
    }
}
