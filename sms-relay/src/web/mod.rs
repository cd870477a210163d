//! Web server module for the Twilio webhook.
//!
//! - `POST /api/sms`: relay an inbound SMS to Telegram, answer with TwiML
//! - `GET /health`: liveness probe

pub mod handlers;
pub mod twiml;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{health, sms_webhook, AppState, HealthResponse};
pub use twiml::{acknowledge, EMPTY_TWIML};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/sms", any(sms_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
