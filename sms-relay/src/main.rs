//! SMS Relay web server.
//!
//! Receives Twilio inbound SMS webhooks, forwards each message to a Telegram
//! chat, and always acknowledges Twilio with an empty TwiML document.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smsrelay::{web, AppState, Config, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("sms_relay_starting");

    // Load configuration
    let config = Config::from_env();
    info!(
        port = config.port,
        bot_token_configured = config.telegram_bot_token.is_some(),
        chat_id_configured = config.telegram_chat_id.is_some(),
        api_base = %config.telegram_api_base,
        timeout_ms = ?config.telegram_timeout_ms,
        "config_loaded"
    );

    let http = Client::builder()
        .build()
        .context("Failed to create HTTP client")?;
    let telegram = TelegramClient::new(
        http,
        config.telegram_api_base.clone(),
        config.telegram_timeout(),
    );

    let state = AppState::new(config.clone(), telegram);
    let app = web::router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "sms_relay_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("sms_relay_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("sms_relay_shutting_down");
}
