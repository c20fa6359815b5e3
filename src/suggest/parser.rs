//! Tag extraction from raw model output
//!
//! The model is asked for a JSON array but frequently wraps it in prose,
//! markdown fences, or drops the structure entirely. Parsing is an ordered
//! list of strategies, each a pure function from text to an optional tag
//! list; the first strategy that yields at least one tag wins. Adding a
//! strategy (say, comma splitting) means adding one function to the chain.

use thiserror::Error;

use super::TagList;

/// No tags could be extracted from the model output
///
/// This is the signal the engine uses to switch to heuristic extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no tags found in model output")]
pub struct ParseError;

/// Extract a bounded tag list from raw model output.
///
/// Strategies, in order:
/// 1. Strict: decode the first single-line `[...]` span as a JSON array of
///    strings.
/// 2. Permissive: collect quoted substrings, line by line.
pub fn parse_tags(raw: &str) -> Result<TagList, ParseError> {
    strict_array(raw)
        .or_else(|| quoted_strings(raw))
        .ok_or(ParseError)
}

/// Strict strategy: the first single-line bracketed span, decoded as a JSON
/// array of strings.
///
/// Only the first span is tried; a response containing several arrays uses
/// the first one. A span that decodes but normalizes to nothing (empty or
/// whitespace-only elements) counts as a miss, so the permissive scan still
/// gets a look at the rest of the text.
fn strict_array(raw: &str) -> Option<TagList> {
    let span = find_bracketed(raw)?;
    let items: Vec<String> = serde_json::from_str(span).ok()?;

    let mut tags = TagList::new();
    for item in &items {
        if tags.is_full() {
            break;
        }
        tags.push(item);
    }

    (!tags.is_empty()).then_some(tags)
}

/// Locate the first `[...]` span that opens and closes on the same line.
fn find_bracketed(raw: &str) -> Option<&str> {
    let mut from = 0;
    while let Some(open) = raw[from..].find('[') {
        let start = from + open;
        let rest = &raw[start + 1..];
        // Non-greedy: the nearest closing bracket wins, as long as no
        // newline sits between the pair.
        match rest.find(']') {
            Some(close) if !rest[..close].contains('\n') => {
                return Some(&raw[start..start + close + 2]);
            }
            _ => from = start + 1,
        }
    }
    None
}

/// Permissive strategy: every substring between a pair of `"` characters,
/// scanned line by line.
///
/// Escaped quotes are treated as plain boundaries, so `\"` splits a token —
/// an accepted limitation rather than something to paper over. An unpaired
/// trailing quote contributes nothing.
fn quoted_strings(raw: &str) -> Option<TagList> {
    let mut tags = TagList::new();

    'lines: for line in raw.lines() {
        let pieces: Vec<&str> = line.split('"').collect();
        for (i, piece) in pieces.iter().enumerate() {
            // Odd-indexed pieces sit between quote i and quote i+1; the
            // last piece never has a closing quote.
            if i % 2 == 1 && i < pieces.len() - 1 {
                tags.push(piece);
                if tags.is_full() {
                    break 'lines;
                }
            }
        }
    }

    (!tags.is_empty()).then_some(tags)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
