//! Webhook endpoint handlers.
//!
//! The SMS handler always answers Twilio with the empty TwiML document once
//! the method is accepted. Whether the relay to Telegram worked only shows up
//! in the logs.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::relay::{relay_sms, RelayOutcome};
use crate::sms::{InboundBody, MAX_BODY_BYTES};
use crate::telegram::TelegramClient;
use crate::web::twiml::acknowledge;
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub telegram: TelegramClient,
}

impl AppState {
    pub fn new(config: Config, telegram: TelegramClient) -> Self {
        Self {
            config: Arc::new(config),
            telegram,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Twilio SMS Webhook
// =============================================================================

/// Twilio inbound SMS endpoint, mounted for every method.
///
/// 1. Rejects anything but POST with 405
/// 2. Acknowledges immediately when Telegram credentials are missing
/// 3. Relays the SMS and acknowledges regardless of the outcome
pub async fn sms_webhook(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    if parts.method != Method::POST {
        warn!(method = %parts.method, "sms_webhook_method_not_allowed");
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }

    let content_type = media_type(&parts.headers);
    info!(content_type = %content_type, "sms_webhook_received");

    let Some(credentials) = state.config.credentials() else {
        warn!(
            bot_token_set = state.config.telegram_bot_token.is_some(),
            chat_id_set = state.config.telegram_chat_id.is_some(),
            outcome = RelayOutcome::NotConfigured.as_str(),
            "sms_relay_skipped"
        );
        return acknowledge();
    };

    let outcome = match inbound_body(&content_type, body).await {
        Ok(inbound) => relay_sms(&state.telegram, &credentials, inbound).await,
        Err(e) => {
            warn!(error = %e, "sms_body_read_failed");
            RelayOutcome::BodyUnreadable
        }
    };

    info!(outcome = outcome.as_str(), "sms_relay_complete");

    acknowledge()
}

/// Lowercased media type of the request, without parameters.
fn media_type(headers: &HeaderMap) -> String {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Pick the body shape from the content type.
///
/// JSON and plain text are read up front; everything else, including
/// `application/x-www-form-urlencoded`, is handed over as an unread stream.
async fn inbound_body(content_type: &str, body: Body) -> Result<InboundBody, axum::Error> {
    match content_type {
        "application/json" => {
            let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES).await?;
            let object = match serde_json::from_slice::<Value>(&bytes) {
                Ok(Value::Object(object)) => object,
                Ok(_) => Map::new(),
                Err(e) => {
                    warn!(error = %e, "sms_json_body_invalid");
                    Map::new()
                }
            };
            Ok(InboundBody::Fields(object))
        }
        "text/plain" => {
            let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES).await?;
            Ok(InboundBody::Text(String::from_utf8_lossy(&bytes).into_owned()))
        }
        _ => Ok(InboundBody::Stream(body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_media_type_strips_parameters() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("Application/X-WWW-Form-Urlencoded; charset=UTF-8"),
        );
        assert_eq!(media_type(&headers), "application/x-www-form-urlencoded");
    }

    #[test]
    fn test_media_type_missing() {
        assert_eq!(media_type(&HeaderMap::new()), "");
    }

    #[tokio::test]
    async fn test_inbound_body_json_object() {
        let body = Body::from(r#"{"From":"+1","Body":"hi"}"#);
        let fields = inbound_body("application/json", body)
            .await
            .unwrap()
            .into_fields()
            .await
            .unwrap();

        assert_eq!(fields.get("From"), Some("+1"));
        assert_eq!(fields.get("Body"), Some("hi"));
    }

    #[tokio::test]
    async fn test_inbound_body_json_not_an_object() {
        let inbound = inbound_body("application/json", Body::from("[1,2]"))
            .await
            .unwrap();
        assert!(inbound.into_fields().await.unwrap().is_empty());

        let inbound = inbound_body("application/json", Body::from("{oops"))
            .await
            .unwrap();
        assert!(inbound.into_fields().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_inbound_body_shapes() {
        assert!(matches!(
            inbound_body("text/plain", Body::from("Body=x")).await.unwrap(),
            InboundBody::Text(_)
        ));
        assert!(matches!(
            inbound_body("application/x-www-form-urlencoded", Body::from("Body=x"))
                .await
                .unwrap(),
            InboundBody::Stream(_)
        ));
    }
}
