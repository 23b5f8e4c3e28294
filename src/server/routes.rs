//! Axum route handlers for the math tutor server.
//!
//! # Routes
//!
//! - `GET  /health`       — Returns `{"status": "ok", "version": ...}`
//! - `POST /api/question` — Answers a question, optionally via Ollama
//! - `GET  /api/models`   — Lists `local` plus whatever Ollama has pulled
//! - `WS   /ws`           — JSON question frames in, reply frames out

use std::sync::{Arc, Mutex};

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::ollama::OllamaClient;
use crate::responder::generate_response;
use crate::topics::TopicCatalog;
use crate::types::Reply;

/// Reply when an internal fault (a poisoned lock) interrupts a request.
/// The worst outcome for any single request is an apologetic text reply.
const INTERNAL_FAULT_TEXT: &str = "Something went wrong, please try again.";

/// Shared application state for the HTTP server.
///
/// Everything here is either read-only (catalog, client) or locked per use
/// (the rng); requests share no other state.
#[derive(Clone)]
pub struct AppState {
    /// Immutable topic reference data, built once at startup.
    pub catalog: Arc<TopicCatalog>,
    /// Client for the optional Ollama delegation.
    pub ollama: OllamaClient,
    /// Random source for example visualizations and response choice.
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            catalog: Arc::new(TopicCatalog::new()),
            ollama: OllamaClient::new(&config.ollama_url),
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    /// State with a seeded rng, for deterministic tests.
    #[cfg(test)]
    pub fn seeded(config: AppConfig, seed: u64) -> Self {
        Self {
            catalog: Arc::new(TopicCatalog::new()),
            ollama: OllamaClient::new(&config.ollama_url),
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/question", post(question_handler))
        .route("/api/models", get(models_handler))
        .route("/ws", get(ws_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "mathtutor",
    }))
}

// ---------------------------------------------------------------------------
// Question handler
// ---------------------------------------------------------------------------

/// Incoming question.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequest {
    /// The user's question text.
    #[serde(default)]
    pub question: String,
    /// Model to answer with; anything other than "local" is tried on Ollama.
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "local".to_string()
}

/// POST /api/question — answer a question.
///
/// With `model == "local"` the question goes straight to the local
/// responder and no network call is made. Any other model is tried on
/// Ollama first; on any failure the handler logs and silently falls back
/// to the local responder.
async fn question_handler(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Json<Value> {
    if request.model != "local" {
        match state.ollama.generate(&request.model, &request.question).await {
            Ok(response) => {
                return Json(serde_json::json!({
                    "response": response,
                    "status": "success",
                    "source": "ollama",
                }));
            }
            Err(e) => {
                tracing::warn!("Ollama failed, falling back to local: {}", e);
            }
        }
    }

    let reply = match state.rng.lock() {
        Ok(mut rng) => generate_response(&state.catalog, &mut *rng, &request.question),
        Err(_) => Reply::text_only(INTERNAL_FAULT_TEXT),
    };

    Json(serde_json::json!({
        "response": reply.text,
        "visualization": reply.visualization,
        "status": "success",
        "source": "local",
    }))
}

// ---------------------------------------------------------------------------
// Models handler
// ---------------------------------------------------------------------------

/// GET /api/models — the "local" pseudo-model plus Ollama's model list.
///
/// The local entry is always present. If Ollama cannot be reached the
/// response degrades to `status: "partial"` with the error message instead
/// of failing the request.
async fn models_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut models = vec![serde_json::json!({"name": "local", "tag": "local"})];

    match state.ollama.list_models().await {
        Ok(ollama_models) => {
            models.extend(ollama_models);
            Json(serde_json::json!({
                "models": models,
                "status": "success",
            }))
        }
        Err(e) => {
            tracing::warn!("could not list Ollama models: {}", e);
            Json(serde_json::json!({
                "models": models,
                "status": "partial",
                "error": e.to_string(),
            }))
        }
    }
}

// ---------------------------------------------------------------------------
// WebSocket handler
// ---------------------------------------------------------------------------

/// Question frame received over the websocket.
#[derive(Debug, Deserialize)]
struct WsQuestion {
    #[serde(default)]
    question: String,
}

/// WS /ws — upgrade and run the per-connection loop.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| ws_loop(socket, state))
}

/// One reply per text frame, until the client goes away or a transport
/// error occurs. No session state is kept between frames.
async fn ws_loop(mut socket: WebSocket, state: AppState) {
    while let Some(msg) = socket.recv().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!("websocket receive error: {}", e);
                break;
            }
        };

        match msg {
            Message::Text(text) => {
                let payload = ws_reply(&state, &text).to_string();
                if socket.send(Message::Text(payload)).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            // Pings are answered by axum; binary frames are not part of
            // the protocol and are ignored.
            _ => {}
        }
    }

    // Closing an already-closed socket returns an error we don't care about.
    let _ = socket.close().await;
}

/// Produce the reply payload for one websocket frame.
///
/// A frame that isn't the expected JSON shape gets a text-only error reply
/// instead of killing the connection.
fn ws_reply(state: &AppState, frame: &str) -> Value {
    let reply = match serde_json::from_str::<WsQuestion>(frame) {
        Ok(request) => match state.rng.lock() {
            Ok(mut rng) => generate_response(&state.catalog, &mut *rng, &request.question),
            Err(_) => Reply::text_only(INTERNAL_FAULT_TEXT),
        },
        Err(_) => Reply::text_only(
            "I couldn't read that message. Send JSON like {\"question\": \"...\"}.",
        ),
    };

    serde_json::json!({
        "response": reply.text,
        "visualization": reply.visualization,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
