//! Integration tests for Layer 4: Runtime
//!
//! Tests for save stores, play sessions, and the REPL loop.


use delve_foundation::Item;
use delve_world::{GraphDocument, RoomRecord};

pub fn document() -> GraphDocument {
    GraphDocument::new(vec![
        RoomRecord::new("r1", "Entry").with_connection("north", "r2"),
        RoomRecord::new("r2", "Hall")
            .with_item(Item::new("i1", "key", "a key"))
            .with_connection("south", "r1"),
    ])
}
