//! TwiML acknowledgment returned to Twilio.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

/// Empty `<Response>`: Twilio sends no reply SMS.
pub const EMPTY_TWIML: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Response></Response>"#;

/// 200 with the empty TwiML document and an XML content type.
pub fn acknowledge() -> Response {
    ([(header::CONTENT_TYPE, "application/xml")], EMPTY_TWIML).into_response()
}
