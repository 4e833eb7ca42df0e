//! End-to-end scenarios
//!
//! Walkthroughs over the two-room reference document, plus property tests
//! over arbitrary command sequences.


use delve_world::GraphDocument;

/// The two-room reference document, as a host would supply it.
pub const TWO_ROOMS: &str = r#"{
    "rooms": [
        {"id": "r1", "description": "Entry", "inventory": [], "connections": {"north": "r2"}},
        {"id": "r2", "description": "Hall",
         "inventory": [{"id": "i1", "name": "key", "description": "a key"}],
         "connections": {"south": "r1"}}
    ]
}"#;

pub fn two_rooms() -> GraphDocument {
    GraphDocument::from_json(TWO_ROOMS).unwrap()
}
