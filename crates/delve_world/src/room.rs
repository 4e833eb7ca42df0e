//! Room nodes.

use std::collections::BTreeMap;

use delve_foundation::{Item, ItemId, RoomId};

/// Handle to a room inside a [`RoomGraph`](crate::RoomGraph).
///
/// Keys are only issued by the graph that owns the room, so a key always
/// resolves to a live node in that graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoomKey(pub(crate) usize);

impl RoomKey {
    /// Returns the arena index of this key.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A location in the game.
#[derive(Clone, Debug)]
pub struct Room {
    id: RoomId,
    description: String,
    inventory: Vec<Item>,
    /// Direction token to target room. One-way: a north exit from A to B
    /// says nothing about B's exits.
    connections: BTreeMap<String, RoomKey>,
}

impl Room {
    /// Creates a room with no connections.
    #[must_use]
    pub fn new(id: RoomId, description: impl Into<String>, inventory: Vec<Item>) -> Self {
        Self {
            id,
            description: description.into(),
            inventory,
            connections: BTreeMap::new(),
        }
    }

    /// Returns the room id.
    #[must_use]
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// Returns the narrative description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the items currently in the room.
    #[must_use]
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Returns the room reached by going `direction`, if any.
    #[must_use]
    pub fn connection(&self, direction: &str) -> Option<RoomKey> {
        self.connections.get(direction).copied()
    }

    /// Iterates over `(direction, target)` pairs in direction order.
    pub fn connections(&self) -> impl Iterator<Item = (&str, RoomKey)> + '_ {
        self.connections.iter().map(|(dir, key)| (dir.as_str(), *key))
    }

    pub(crate) fn connect(&mut self, direction: String, target: RoomKey) {
        self.connections.insert(direction, target);
    }

    /// Finds the first item whose lowercased name equals `word`.
    #[must_use]
    pub fn find_item(&self, word: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.answers_to(word))
    }

    /// Removes and returns the item with the given id.
    ///
    /// Returns `None` if no such item is in the room.
    pub fn remove_item(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.inventory.iter().position(|item| &item.id == id)?;
        Some(self.inventory.remove(index))
    }

    /// Replaces the room's inventory wholesale.
    pub fn replace_inventory(&mut self, inventory: Vec<Item>) {
        self.inventory = inventory;
    }
}
