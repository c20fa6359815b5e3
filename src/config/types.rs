// Configuration type definitions

use serde::Deserialize;

/// Default model endpoint base URL (a local Ollama server)
pub const DEFAULT_MODEL_URL: &str = "http://localhost:11434";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "mistral";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_url() -> String {
    DEFAULT_MODEL_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Model endpoint configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelConfig {
    /// Base URL of the generation endpoint
    #[serde(default = "default_url")]
    pub url: String,

    /// Model identifier sent with each generate request
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on a single generate request; an unanswered request past
    /// this is treated as a model failure
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            url: default_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
}
