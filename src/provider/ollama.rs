//! Ollama API client
//!
//! Single non-streaming `POST /api/generate` call per suggestion. No
//! retries: a failed attempt goes straight back to the caller, which keeps
//! suggestion latency bounded by one timeout.

use std::time::Duration;

use serde::Deserialize;

use super::{ModelClient, ModelError};

/// Non-streaming response body from `/api/generate`
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
    #[serde(default)]
    done: bool,
}

/// Client for a locally hosted Ollama-style generation endpoint
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a client for `base_url` with a per-request timeout.
    ///
    /// The timeout bounds the whole request, so an unresponsive model
    /// server surfaces as `ModelError::Timeout` instead of hanging the
    /// suggestion path.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint URL for generate requests
    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Build the JSON request body for a generate call
    fn build_request_body(model: &str, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": model,
            "prompt": prompt,
            "stream": false,
        })
    }
}

impl ModelClient for OllamaClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ModelError> {
        let response = self
            .http
            .post(self.generate_url())
            .json(&Self::build_request_body(model, prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout
                } else {
                    ModelError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ModelError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Parse(e.to_string()))?;

        if !body.done {
            log::debug!("model reported done=false on a non-streaming request");
        }

        if body.response.trim().is_empty() {
            return Err(ModelError::Parse("model returned empty text".to_string()));
        }

        Ok(body.response)
    }
}

#[cfg(test)]
#[path = "ollama_tests.rs"]
mod ollama_tests;
