//! Tag suggestion subsystem
//!
//! Everything between "here is a product" and "here are its tags": prompt
//! construction, layered parsing of raw model output, the deterministic
//! keyword fallback, and the engine that ties them together. Every path
//! funnels its output through [`TagList`], so the caller always receives
//! between 1 and 5 distinct, non-empty, normalized tags.

pub mod engine;
pub mod fallback;
pub mod parser;
pub mod prompt;

use serde::Serialize;

pub use engine::TagSuggester;
pub use fallback::fallback_tags;
pub use parser::{ParseError, parse_tags};
pub use prompt::build_prompt;

/// Maximum number of tags any suggestion path may return
pub const MAX_TAGS: usize = 5;

/// Bounded, deduplicated, order-preserving list of product tags
///
/// The sole output type of the suggestion core, regardless of which code
/// path produced it. Growth happens only through [`TagList::push`], which
/// normalizes each candidate and enforces the invariants: no empty entries,
/// no duplicates, never more than [`MAX_TAGS`] elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    /// Create an empty list
    pub fn new() -> Self {
        TagList(Vec::new())
    }

    /// Normalize `tag` (trim + lowercase) and append it.
    ///
    /// The tag is dropped when it normalizes to nothing, is already present
    /// (case-sensitive equality after normalization), or the list is full.
    /// Returns whether the tag was appended.
    pub fn push(&mut self, tag: &str) -> bool {
        if self.is_full() {
            return false;
        }

        let normalized = tag.trim().to_lowercase();
        if normalized.is_empty() || self.0.contains(&normalized) {
            return false;
        }

        self.0.push(normalized);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the list has reached [`MAX_TAGS`]
    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_TAGS
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod suggest_tests;
