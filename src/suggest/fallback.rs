//! Deterministic keyword-based tag extraction
//!
//! The guaranteed-available path: fixed-vocabulary substring matching plus
//! token extraction from the product name. Pure and total — identical input
//! always yields byte-identical output, which is what makes this safe to
//! serve whenever the model path fails.

use super::TagList;

/// Domain keywords matched as substrings of the combined name and
/// description, in priority order
pub const VOCABULARY: &[&str] = &[
    "wireless",
    "bluetooth",
    "portable",
    "rechargeable",
    "waterproof",
    "smart",
    "gaming",
    "audio",
    "speaker",
    "headphones",
    "camera",
    "fitness",
    "kitchen",
    "outdoor",
    "travel",
    "leather",
    "cotton",
    "organic",
    "eco-friendly",
    "handmade",
    "vintage",
    "electric",
    "ergonomic",
    "compact",
    "premium",
];

/// Name tokens that carry no descriptive value on their own
const STOPWORDS: &[&str] = &["the", "and", "for", "with"];

/// Seed tags applied when nothing in the vocabulary matches, so the result
/// is never empty
const GENERIC_TAGS: &[&str] = &["product", "item", "merchandise"];

/// Derive tags from the product fields alone, without the model.
///
/// Vocabulary hits come first, in vocabulary order; if there are none, the
/// generic seed tags take their place. Tokens from the name then top the
/// list up to capacity.
pub fn fallback_tags(name: &str, description: &str) -> TagList {
    let haystack = format!("{name} {description}").to_lowercase();

    let mut tags = TagList::new();
    for keyword in VOCABULARY {
        if haystack.contains(keyword) {
            tags.push(keyword);
        }
    }

    if tags.is_empty() {
        for generic in GENERIC_TAGS {
            tags.push(generic);
        }
    }

    for token in name.split(|c: char| c.is_whitespace() || c == '-' || c == '_') {
        if tags.is_full() {
            break;
        }
        if token.chars().count() > 2 && !STOPWORDS.contains(&token.to_lowercase().as_str()) {
            tags.push(token);
        }
    }

    tags
}

#[cfg(test)]
#[path = "fallback_tests.rs"]
mod fallback_tests;
