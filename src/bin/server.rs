//! mathtutor HTTP server binary.
//!
//! Starts an axum server exposing the math tutor REST and WebSocket API.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8000)
//! - `OLLAMA_URL` — Ollama API base (default: http://localhost:11434/api)
//! - `RUST_LOG` — Tracing filter (default: "info,mathtutor=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use anyhow::Context;

use mathtutor::config::AppConfig;
use mathtutor::server::{app_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mathtutor=debug".into()),
        )
        .init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr();
    tracing::info!("Ollama base URL: {}", config.ollama_url);

    let state = AppState::new(config);
    let app = app_router(state);

    tracing::info!("mathtutor server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health        — liveness probe");
    tracing::info!("  POST /api/question  — answer a math question");
    tracing::info!("  GET  /api/models    — local + Ollama models");
    tracing::info!("  WS   /ws            — chat over websocket");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
