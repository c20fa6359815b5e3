//! Suggestion orchestration
//!
//! Owns the overall contract: one model attempt, then degrade. The caller
//! always gets between 1 and 5 tags and never an error — tag suggestion is
//! best-effort when the model is healthy and baseline-quality when it is
//! not.

use crate::provider::ModelClient;

use super::{TagList, fallback, parser, prompt};

/// How much of the prompt and response to show in debug logs
const LOG_PREVIEW_CHARS: usize = 120;

/// Tag suggestion engine backed by a generative model
#[derive(Debug, Clone)]
pub struct TagSuggester<C: ModelClient> {
    client: C,
    model: String,
}

impl<C: ModelClient> TagSuggester<C> {
    /// Create a suggester that sends prompts to `model` via `client`
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Suggest 1..=5 tags for a product.
    ///
    /// Asks the model exactly once; a client failure or unparseable output
    /// degrades to the deterministic keyword extractor. This method cannot
    /// fail.
    pub async fn suggest(&self, name: &str, description: &str) -> TagList {
        let prompt = prompt::build_prompt(name, description);
        log::debug!("prompting {}: {}", self.model, preview(&prompt));

        let raw = match self.client.generate(&self.model, &prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("model unavailable ({e}), using fallback tags");
                return fallback::fallback_tags(name, description);
            }
        };

        log::debug!("model response: {}", preview(&raw));

        match parser::parse_tags(&raw) {
            Ok(tags) => tags,
            Err(e) => {
                log::warn!("{e}, using fallback tags");
                fallback::fallback_tags(name, description)
            }
        }
    }
}

/// Flatten and truncate text for a log line
fn preview(text: &str) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= LOG_PREVIEW_CHARS {
        flat
    } else {
        let cut: String = flat.chars().take(LOG_PREVIEW_CHARS).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
