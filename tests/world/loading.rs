//! Tests for graph loading policies

use delve_foundation::{ErrorKind, Item};
use delve_world::{GraphDocument, LinkPolicy, RoomGraph, RoomRecord};

fn document() -> GraphDocument {
    GraphDocument::new(vec![
        RoomRecord::new("r1", "Entry")
            .with_connection("north", "r2")
            .with_connection("down", "nowhere"),
        RoomRecord::new("r2", "Hall")
            .with_item(Item::new("i1", "key", "a key"))
            .with_connection("south", "r1"),
    ])
}

#[test]
fn first_record_is_start() {
    let graph = RoomGraph::load(&document(), LinkPolicy::default()).unwrap();
    assert_eq!(graph.room(graph.start()).id().as_str(), "r1");
    assert_eq!(graph.len(), 2);
}

#[test]
fn connections_resolve_by_id() {
    let graph = RoomGraph::load(&document(), LinkPolicy::Drop).unwrap();
    let hall = graph.exit(graph.start(), "north").unwrap();
    assert_eq!(graph.room(hall).description(), "Hall");
    assert_eq!(graph.exit(hall, "south"), Some(graph.start()));
}

#[test]
fn connections_are_not_symmetric() {
    let doc = GraphDocument::new(vec![
        RoomRecord::new("r1", "Entry").with_connection("north", "r2"),
        RoomRecord::new("r2", "Hall"),
    ]);
    let graph = RoomGraph::load(&doc, LinkPolicy::Strict).unwrap();
    let hall = graph.key("r2").unwrap();
    assert_eq!(graph.exit(hall, "south"), None);
}

#[test]
fn drop_policy_discards_dangling_links() {
    let graph = RoomGraph::load(&document(), LinkPolicy::Drop).unwrap();
    assert_eq!(graph.exit(graph.start(), "down"), None);
    assert_eq!(graph.room(graph.start()).connections().count(), 1);
}

#[test]
fn strict_policy_rejects_dangling_links() {
    let err = RoomGraph::load(&document(), LinkPolicy::Strict).unwrap_err();
    match err.kind {
        ErrorKind::DanglingConnection {
            room,
            direction,
            target,
        } => {
            assert_eq!(room.as_str(), "r1");
            assert_eq!(direction, "down");
            assert_eq!(target.as_str(), "nowhere");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rooms_sharing_a_description_stay_distinct() {
    let doc = GraphDocument::new(vec![
        RoomRecord::new("a", "A dark room").with_connection("east", "b"),
        RoomRecord::new("b", "A dark room").with_item(Item::new("i1", "coin", "a coin")),
    ]);
    let graph = RoomGraph::load(&doc, LinkPolicy::Strict).unwrap();
    assert_eq!(graph.len(), 2);
    assert!(graph.get("a").unwrap().inventory().is_empty());
    assert_eq!(graph.get("b").unwrap().inventory().len(), 1);
}

#[test]
fn empty_and_duplicate_documents_fail() {
    let err = RoomGraph::load(&GraphDocument::new(Vec::new()), LinkPolicy::Drop).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyDocument));

    let doc = GraphDocument::new(vec![RoomRecord::new("r1", "A"), RoomRecord::new("r1", "B")]);
    let err = RoomGraph::load(&doc, LinkPolicy::Drop).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateRoom(_)));
}
