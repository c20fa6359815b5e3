//! Tests for the deterministic fallback extractor

use super::*;
use proptest::prelude::*;

#[test]
fn test_vocabulary_matches_come_first() {
    let tags = fallback_tags("Bluetooth Speaker", "A wireless portable speaker");

    assert!(tags.contains("wireless"));
    assert!(tags.contains("portable"));
    assert!(tags.contains("bluetooth"));
    assert!(tags.contains("speaker"));
    assert!(!tags.contains("product"));
    assert!(tags.len() <= 5);
}

#[test]
fn test_vocabulary_order_is_priority_order() {
    // All four words appear; output follows VOCABULARY order, not text order.
    let tags = fallback_tags("Speaker", "portable bluetooth wireless");
    assert_eq!(
        tags.into_vec(),
        vec!["wireless", "bluetooth", "portable", "speaker"]
    );
}

#[test]
fn test_generic_seed_when_nothing_matches() {
    let tags = fallback_tags("Xyzzyx", "Qwerty");
    assert_eq!(
        tags.into_vec(),
        vec!["product", "item", "merchandise", "xyzzyx"]
    );
}

#[test]
fn test_name_tokens_fill_remaining_slots() {
    let tags = fallback_tags("Walnut Chess Board", "Classic strategy set");
    // No vocabulary hits, so: generics, then name tokens until full.
    assert_eq!(
        tags.into_vec(),
        vec!["product", "item", "merchandise", "walnut", "chess"]
    );
}

#[test]
fn test_name_tokens_split_on_hyphen_and_underscore() {
    let tags = fallback_tags("Ultra-Grip_Mount", "Zzq");
    assert_eq!(
        tags.into_vec(),
        vec!["product", "item", "merchandise", "ultra", "grip"]
    );
}

#[test]
fn test_short_and_stopword_tokens_are_skipped() {
    let tags = fallback_tags("The Mug for Tea", "Zzq");
    // "the"/"for" are stopwords, "Tea" passes the length bar, "Mug" does too.
    assert_eq!(
        tags.into_vec(),
        vec!["product", "item", "merchandise", "mug", "tea"]
    );
}

#[test]
fn test_name_token_duplicate_of_vocabulary_hit_is_dropped() {
    let tags = fallback_tags("Wireless Charger", "Fast wireless charging pad");
    let tags = tags.into_vec();
    assert_eq!(tags.iter().filter(|t| *t == "wireless").count(), 1);
}

#[test]
fn test_caps_at_five_vocabulary_hits() {
    let tags = fallback_tags(
        "Action Camera",
        "waterproof rechargeable bluetooth wireless portable smart",
    );
    assert_eq!(
        tags.into_vec(),
        vec![
            "wireless",
            "bluetooth",
            "portable",
            "rechargeable",
            "waterproof"
        ]
    );
}

#[test]
fn test_never_empty_even_for_degenerate_input() {
    let tags = fallback_tags("", "");
    assert_eq!(tags.into_vec(), vec!["product", "item", "merchandise"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_fallback_is_deterministic(
        name in ".{0,80}",
        description in ".{0,200}",
    ) {
        let first = fallback_tags(&name, &description);
        let second = fallback_tags(&name, &description);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_fallback_is_bounded_and_deduped(
        name in ".{0,80}",
        description in ".{0,200}",
    ) {
        let tags = fallback_tags(&name, &description).into_vec();

        prop_assert!(!tags.is_empty());
        prop_assert!(tags.len() <= 5);
        for (i, tag) in tags.iter().enumerate() {
            prop_assert!(!tag.trim().is_empty());
            prop_assert!(!tags[..i].contains(tag));
        }
    }
}
