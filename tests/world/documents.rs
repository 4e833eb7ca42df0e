//! Tests for the room-graph document format

use delve_foundation::ErrorKind;
use delve_world::GraphDocument;

#[test]
fn parses_full_document() {
    let doc = GraphDocument::from_json(
        r#"{"rooms":[
            {"id":"r1","description":"Entry","inventory":[],"connections":{"north":"r2"}},
            {"id":"r2","description":"Hall",
             "inventory":[{"id":"i1","name":"key","description":"a key"}],
             "connections":{"south":"r1"}}
        ]}"#,
    )
    .unwrap();

    assert_eq!(doc.rooms.len(), 2);
    assert_eq!(doc.start_room().unwrap().id.as_str(), "r1");
    assert_eq!(doc.rooms[1].inventory[0].name, "key");
    assert_eq!(doc.rooms[0].connections["north"].as_str(), "r2");
}

#[test]
fn inventory_and_connections_default_to_empty() {
    let doc = GraphDocument::from_json(r#"{"rooms":[{"id":"r1","description":"Entry"}]}"#).unwrap();
    assert!(doc.rooms[0].inventory.is_empty());
    assert!(doc.rooms[0].connections.is_empty());
}

#[test]
fn malformed_document_is_invalid() {
    for text in ["", "[]", r#"{"rooms":{}}"#, r#"{"rooms":[{"id":"r1"}]}"#] {
        let err = GraphDocument::from_json(text).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidDocument(_)), "{text}");
    }
}
