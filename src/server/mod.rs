//! HTTP/WebSocket server for the math tutor frontend.
//!
//! # Endpoints
//!
//! - `GET  /health`        — Liveness probe
//! - `POST /api/question`  — Answer a question (local or via Ollama)
//! - `GET  /api/models`    — Available models (local plus Ollama's)
//! - `WS   /ws`            — One reply per incoming question frame

pub mod routes;

pub use routes::{app_router, AppState};
