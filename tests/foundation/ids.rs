//! Tests for string identifiers

use std::collections::HashMap;

use delve_foundation::{ItemId, RoomId};

#[test]
fn ids_serialize_as_plain_strings() {
    let id = RoomId::new("cellar");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"cellar\"");

    let back: ItemId = serde_json::from_str("\"lamp\"").unwrap();
    assert_eq!(back.as_str(), "lamp");
}

#[test]
fn ids_can_be_looked_up_by_str() {
    let mut rooms = HashMap::new();
    rooms.insert(RoomId::from("r1"), "Entry");
    assert_eq!(rooms.get("r1"), Some(&"Entry"));
}

#[test]
fn debug_names_the_kind() {
    assert_eq!(format!("{:?}", RoomId::new("r1")), "RoomId(r1)");
    assert_eq!(format!("{:?}", ItemId::new("i1")), "ItemId(i1)");
    assert_eq!(format!("{}", ItemId::new("i1")), "i1");
}
