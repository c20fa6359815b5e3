//! Tests for the TagList invariants

use super::*;

#[test]
fn test_push_normalizes() {
    let mut tags = TagList::new();
    assert!(tags.push("  Wireless "));
    assert_eq!(tags.into_vec(), vec!["wireless"]);
}

#[test]
fn test_push_rejects_empty_and_whitespace() {
    let mut tags = TagList::new();
    assert!(!tags.push(""));
    assert!(!tags.push("   "));
    assert!(tags.is_empty());
}

#[test]
fn test_push_deduplicates_after_normalization() {
    let mut tags = TagList::new();
    assert!(tags.push("audio"));
    assert!(!tags.push("AUDIO"));
    assert!(!tags.push(" audio "));
    assert_eq!(tags.len(), 1);
}

#[test]
fn test_push_stops_at_capacity() {
    let mut tags = TagList::new();
    for tag in ["a", "b", "c", "d", "e"] {
        assert!(tags.push(tag));
    }
    assert!(tags.is_full());
    assert!(!tags.push("f"));
    assert_eq!(tags.len(), MAX_TAGS);
}

#[test]
fn test_preserves_insertion_order() {
    let mut tags = TagList::new();
    tags.push("zebra");
    tags.push("apple");
    assert_eq!(tags.into_vec(), vec!["zebra", "apple"]);
}

#[test]
fn test_contains_is_exact() {
    let mut tags = TagList::new();
    tags.push("Gadget");
    assert!(tags.contains("gadget"));
    assert!(!tags.contains("Gadget"));
    assert!(!tags.contains("gad"));
}

#[test]
fn test_serializes_as_json_array() {
    let mut tags = TagList::new();
    tags.push("audio");
    tags.push("wireless");
    assert_eq!(
        serde_json::to_string(&tags).unwrap(),
        r#"["audio","wireless"]"#
    );
}
