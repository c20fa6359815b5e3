//! Model client abstraction
//!
//! Defines the ModelClient trait, ModelError types, and the Ollama-backed
//! implementation. The model endpoint is treated as an untrusted,
//! possibly-slow, possibly-down dependency: every error here means
//! "model unavailable" to the suggestion engine, which degrades to the
//! deterministic fallback.

use std::future::Future;

use thiserror::Error;

mod ollama;

pub use ollama::OllamaClient;

/// Errors that can occur while talking to the model endpoint
#[derive(Debug, Error)]
pub enum ModelError {
    /// Network error during the API request
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the API response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A text-generation backend with exactly one operation: send a prompt to a
/// named model, get raw generated text back.
///
/// Injected into the engine so tests can substitute a client that fails
/// deterministically or returns canned text — no real model call in tests.
pub trait ModelClient {
    /// Generate text for `prompt` using `model`
    fn generate(
        &self,
        model: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ModelError>> + Send;
}
