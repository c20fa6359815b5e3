//! Model-backed product tag suggestion with a deterministic fallback.
//!
//! `tagmint` asks a locally hosted text-generation model for keyword tags
//! describing a product, then extracts a bounded, deduplicated tag list from
//! whatever text comes back. When the model is unreachable, times out, or
//! returns text no parsing strategy can use, a deterministic keyword
//! extractor produces the tags instead — suggestion is always available,
//! with best-effort quality when the model is healthy and a guaranteed
//! baseline when it is not.

pub mod config;
pub mod error;
pub mod provider;
pub mod suggest;

pub use suggest::{TagList, TagSuggester, fallback_tags, parse_tags};
