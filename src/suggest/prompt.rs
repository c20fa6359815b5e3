//! Prompt construction for tag suggestion

/// Render the tag-suggestion prompt for a product.
///
/// The model is pushed hard toward a bare JSON array: an element count, an
/// explicit example, and an "array only" closing instruction. Models still
/// wrap the array in prose often enough that the parser treats all of this
/// as a hint, not a guarantee.
pub fn build_prompt(name: &str, description: &str) -> String {
    format!(
        r#"You are a product tagging assistant. Suggest exactly 5 short keyword tags for the following product.

Product name: {name}
Product description: {description}

Rules:
- Each tag is a single short lowercase keyword or two-word phrase.
- Tags describe the product's category, features, or intended use.
- Do not repeat tags.

Respond with a JSON array of exactly 5 strings, for example:
["audio", "wireless", "bluetooth", "portable", "smart"]

Output only the JSON array, nothing else."#
    )
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
