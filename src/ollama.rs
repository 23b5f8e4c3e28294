//! HTTP client for a local Ollama instance.
//!
//! Ollama is optional: every error here is recovered by the callers, either
//! by falling back to the local responder (`/api/question`) or by returning
//! a partial model list (`/api/models`). Each call carries its own bounded
//! timeout so an unreachable instance cannot stall a request indefinitely.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Default API base, matching a stock local Ollama install.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api";

/// Timeout for text generation. Generation is slow; listing is not.
const GENERATE_TIMEOUT: Duration = Duration::from_secs(30);
const TAGS_TIMEOUT: Duration = Duration::from_secs(5);

/// Ways talking to Ollama can fail. All of them mean "unavailable" to the
/// HTTP handlers.
#[derive(Debug, Error)]
pub enum OllamaError {
    #[error("could not reach Ollama: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Ollama returned status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<Value>,
}

/// Client for the two Ollama endpoints this service uses.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a client for the given API base URL (for example
    /// `http://localhost:11434/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask Ollama to answer a prompt with the given model, non-streaming.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String, OllamaError> {
        let endpoint = format!("{}/generate", self.base_url);
        let body = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&endpoint)
            .timeout(GENERATE_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OllamaError::Status(status));
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed
            .response
            .unwrap_or_else(|| "Ollama did not return a response.".to_string()))
    }

    /// List the models the Ollama instance has pulled. Entries are passed
    /// through as-is so the frontend sees Ollama's own model metadata.
    pub async fn list_models(&self) -> Result<Vec<Value>, OllamaError> {
        let endpoint = format!("{}/tags", self.base_url);

        let response = self
            .client
            .get(&endpoint)
            .timeout(TAGS_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OllamaError::Status(status));
        }

        let parsed: TagsResponse = response.json().await?;
        Ok(parsed.models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_body_shape() {
        let body = GenerateRequest {
            model: "llama3",
            prompt: "what is 2 + 2",
            stream: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama3");
        assert_eq!(json["prompt"], "what is 2 + 2");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_tags_response_tolerates_missing_models() {
        let parsed: TagsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.models.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_instance_is_an_error() {
        // Nothing listens on port 1; both calls must fail, not hang.
        let client = OllamaClient::new("http://127.0.0.1:1/api");
        assert!(client.generate("llama3", "hi").await.is_err());
        assert!(client.list_models().await.is_err());
    }
}
