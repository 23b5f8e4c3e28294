//! # mathtutor
//!
//! Backend for an educational math chat assistant. Answers natural-language
//! arithmetic questions over REST and WebSocket: questions containing a
//! binary expression are evaluated locally, questions about a known topic
//! get a canned explanation plus a small visualization payload, and anything
//! else gets a generic help reply. Requests may optionally be delegated to a
//! local Ollama instance, falling back to the built-in answers when it is
//! unreachable.

pub mod config;
pub mod evaluator;
pub mod extractor;
pub mod ollama;
pub mod responder;
pub mod server;
pub mod topics;
pub mod types;
pub mod visualization;

pub use responder::generate_response;
pub use topics::{Topic, TopicCatalog};
pub use types::{Expression, Operator, Reply, Visualization};

/// Crate version, reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
