//! Tests for the player entity

use delve_foundation::{Item, ItemId};
use delve_world::{GraphDocument, LinkPolicy, Player, RoomGraph, RoomRecord};

fn graph() -> RoomGraph {
    let doc = GraphDocument::new(vec![
        RoomRecord::new("r1", "Entry").with_connection("north", "r2"),
        RoomRecord::new("r2", "Hall")
            .with_item(Item::new("i1", "key", "a key"))
            .with_connection("south", "r1"),
    ]);
    RoomGraph::load(&doc, LinkPolicy::Strict).unwrap()
}

#[test]
fn travel_follows_connections() {
    let graph = graph();
    let mut player = Player::new(10, graph.start(), Vec::new());

    assert!(player.travel(&graph, "north"));
    assert_eq!(graph.room(player.current_room()).id().as_str(), "r2");
    assert!(player.travel(&graph, "south"));
    assert_eq!(player.current_room(), graph.start());
}

#[test]
fn travel_without_exit_stays_put() {
    let graph = graph();
    let mut player = Player::new(10, graph.start(), Vec::new());
    assert!(!player.travel(&graph, "west"));
    assert_eq!(player.current_room(), graph.start());
}

#[test]
fn item_moves_from_room_to_player() {
    let mut graph = graph();
    let hall = graph.key("r2").unwrap();
    let mut player = Player::new(10, hall, Vec::new());

    let item = graph.room_mut(hall).remove_item(&ItemId::new("i1")).unwrap();
    player.add_item(item);

    assert!(graph.room(hall).inventory().is_empty());
    assert_eq!(player.inventory()[0].id.as_str(), "i1");
    assert!(graph.room_mut(hall).remove_item(&ItemId::new("i1")).is_none());
}

#[test]
fn remove_item_matches_exact_name() {
    let graph = graph();
    let mut player = Player::new(10, graph.start(), vec![Item::new("i1", "Key", "a key")]);
    assert!(player.remove_item("key").is_none());
    assert!(player.remove_item("Key").is_some());
    assert!(player.inventory().is_empty());
}

#[test]
fn health_decides_life() {
    let graph = graph();
    let mut player = Player::new(1, graph.start(), Vec::new());
    assert!(player.is_alive());
    player.set_health(0);
    assert!(!player.is_alive());
    player.set_health(-5);
    assert!(!player.is_alive());
}
