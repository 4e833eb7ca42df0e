//! Player state.

use delve_foundation::Item;

use crate::graph::RoomGraph;
use crate::room::RoomKey;

/// The single player of a game.
#[derive(Clone, Debug)]
pub struct Player {
    health: i64,
    inventory: Vec<Item>,
    /// Always a key issued by the graph the player was placed in.
    current_room: RoomKey,
}

impl Player {
    /// Creates a player standing in `room`.
    #[must_use]
    pub fn new(health: i64, room: RoomKey, inventory: Vec<Item>) -> Self {
        Self {
            health,
            inventory,
            current_room: room,
        }
    }

    /// Returns the player's health.
    #[must_use]
    pub const fn health(&self) -> i64 {
        self.health
    }

    /// Sets the player's health.
    pub fn set_health(&mut self, health: i64) {
        self.health = health;
    }

    /// Returns true while health is above zero.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Returns the items the player carries.
    #[must_use]
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Returns the room the player is in.
    #[must_use]
    pub const fn current_room(&self) -> RoomKey {
        self.current_room
    }

    /// Moves along the current room's `direction` connection.
    ///
    /// Returns false and stays put when there is no such connection.
    pub fn travel(&mut self, graph: &RoomGraph, direction: &str) -> bool {
        match graph.exit(self.current_room, direction) {
            Some(next) => {
                self.current_room = next;
                true
            }
            None => false,
        }
    }

    /// Adds an item to the inventory.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Removes the first item whose name is exactly `name`.
    ///
    /// Matching is case-sensitive. Returns `None` if nothing matched.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let index = self.inventory.iter().position(|item| item.name == name)?;
        Some(self.inventory.remove(index))
    }
}
