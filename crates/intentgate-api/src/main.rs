//! # intentgate-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Intentgate gateway.
//! Binds to a configurable port (default 8080).
//!
//! Environment:
//!
//! - `PORT` — TCP port (default 8080)
//! - `SHARED_SECRET` — HMAC authentication key (default `dev_secret`, with
//!   a startup warning)
//! - `QUARANTINE_THRESHOLD` — routing threshold in `[0, 1]` (default 0.5)
//! - `AUDIT_LOG` — path of the JSONL audit log (default `audit_log.jsonl`)
//! - `PUBLISH_DIR` — directory for published artifacts (default `published`)

use intentgate_api::state::{AppConfig, AppState};
use intentgate_crypto::SharedSecret;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let shared_secret = match std::env::var("SHARED_SECRET") {
        Ok(secret) => SharedSecret::new(secret.into_bytes()),
        Err(_) => {
            tracing::warn!(
                "SHARED_SECRET not set — using the development default; \
                 do not expose this instance"
            );
            SharedSecret::from("dev_secret")
        }
    };

    let quarantine_threshold: f64 = std::env::var("QUARANTINE_THRESHOLD")
        .ok()
        .and_then(|t| t.parse().ok())
        .unwrap_or(0.5);

    let audit_log = std::env::var("AUDIT_LOG")
        .unwrap_or_else(|_| "audit_log.jsonl".to_string())
        .into();
    let publish_dir = std::env::var("PUBLISH_DIR")
        .unwrap_or_else(|_| "published".to_string())
        .into();

    let config = AppConfig {
        port,
        shared_secret,
        quarantine_threshold,
        audit_log,
        publish_dir,
    };

    let state = AppState::new(&config).map_err(|e| {
        tracing::error!("State initialization failed: {e}");
        anyhow::anyhow!(e)
    })?;

    let app = intentgate_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Intentgate listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
