//! Tests for items

use delve_foundation::Item;

#[test]
fn item_json_shape() {
    let item: Item =
        serde_json::from_str(r#"{"id":"i1","name":"Key","description":"a key"}"#).unwrap();
    assert_eq!(item, Item::new("i1", "Key", "a key"));

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], "i1");
    assert_eq!(json["name"], "Key");
    assert_eq!(json["description"], "a key");
}

#[test]
fn names_match_case_insensitively() {
    let item = Item::new("i1", "Brass Key", "a key");
    assert!(item.answers_to("brass key"));
    assert!(!item.answers_to("brass"));
}
