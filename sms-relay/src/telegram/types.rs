//! Telegram Bot API request types.

use serde::Serialize;

/// Form body of a `sendMessage` call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SendMessage {
    pub chat_id: String,
    pub text: String,
    /// Serialized as `true`/`false`, which the Bot API accepts in form bodies.
    pub disable_web_page_preview: bool,
}

impl SendMessage {
    /// Plain-text message with link previews turned off.
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            disable_web_page_preview: true,
        }
    }
}
