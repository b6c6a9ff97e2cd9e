mod error;
mod rate_limit;
mod relay;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use error::ErrorCode;
use relay::config::{RelayConfig, RelayTimeouts};
use relay::emailjs::EmailJsRelay;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the real environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Relay configuration (non-fatal: submissions answer 503 if missing).
    let relay_config = match RelayConfig::from_env() {
        Ok(config) => {
            tracing::info!(service_id = %config.service_id, template_id = %config.template_id, "contact relay configured");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(error = %e, code = e.error_code(), "contact relay not configured; submissions will fail");
            None
        }
    };
    let relay = EmailJsRelay::new(RelayTimeouts::from_env()).expect("relay HTTP client init failed");
    let limiter = rate_limit::RateLimiter::new();
    let contact = services::contact::ContactService::new(relay_config, Arc::new(relay), limiter);
    let state = state::AppState::new(contact);
    let contact_enabled = state.contact.is_configured();

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, contact_enabled, "portfolio listening");
    axum::serve(listener, app).await.expect("server failed");
}
