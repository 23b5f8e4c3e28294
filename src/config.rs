//! Environment-derived configuration, read once at startup.

use crate::ollama::DEFAULT_OLLAMA_URL;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to listen on (`PORT`, default 8000).
    pub port: u16,
    /// Ollama API base URL (`OLLAMA_URL`).
    pub ollama_url: String,
}

impl AppConfig {
    /// Load from environment variables, with defaults for local use.
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            ollama_url: std::env::var("OLLAMA_URL")
                .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string()),
        }
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
        }
    }
}
