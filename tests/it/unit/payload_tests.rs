//! Unit tests for drop payload shapes and their serialized form.

use humandrag::{DataItem, DropPayload};
use std::collections::BTreeMap;

#[test]
fn test_single_entry_degenerates_to_bare_value() {
    let payload = DropPayload::from_entries([("text".to_string(), "hello".to_string())]);
    assert_eq!(payload, DropPayload::Value("hello".to_string()));
    assert_eq!(payload.as_value(), Some("hello"));
    assert!(payload.as_map().is_none());
}

#[test]
fn test_multiple_entries_build_a_map() {
    let payload = DropPayload::from_entries([
        ("text".to_string(), "a".to_string()),
        ("custom".to_string(), "b".to_string()),
    ]);
    let mut expected = BTreeMap::new();
    expected.insert("text".to_string(), "a".to_string());
    expected.insert("custom".to_string(), "b".to_string());
    assert_eq!(payload, DropPayload::Map(expected));
    assert!(payload.as_value().is_none());
}

#[test]
fn test_no_entries_build_an_empty_map() {
    let payload = DropPayload::from_entries(Vec::new());
    assert_eq!(payload, DropPayload::Map(BTreeMap::new()));
}

#[test]
fn test_single_value_serializes_as_bare_string() {
    let payload = DropPayload::Value("hello".to_string());
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!("hello")
    );
}

#[test]
fn snapshot_multi_kind_payload() {
    let payload = DropPayload::from_entries([
        ("text".to_string(), "a".to_string()),
        ("custom".to_string(), "b".to_string()),
    ]);
    insta::assert_json_snapshot!(payload, @r#"
    {
      "custom": "b",
      "text": "a"
    }
    "#);
}

#[test]
fn snapshot_data_item() {
    insta::assert_json_snapshot!(DataItem::new("text", "hello"), @r#"
    {
      "kind": "text",
      "value": "hello"
    }
    "#);
}
