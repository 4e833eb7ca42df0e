//! The room graph arena and its loader.
//!
//! Loading runs in two passes: every record becomes a [`Room`] with no
//! connections, then each record's connections are resolved against the
//! rooms built in the first pass. Rooms are keyed strictly by id.

use std::collections::HashMap;

use delve_foundation::{Error, Result, RoomId};
use tracing::debug;

use crate::document::GraphDocument;
use crate::room::{Room, RoomKey};

/// What the loader does with a connection whose target id is not in the
/// document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkPolicy {
    /// Drop the connection and keep loading.
    #[default]
    Drop,
    /// Fail the load with a dangling connection error.
    Strict,
}

/// Owns every room of one game.
#[derive(Clone, Debug)]
pub struct RoomGraph {
    /// Rooms in document order; index 0 is the start room.
    rooms: Vec<Room>,
    /// Room id to arena slot.
    index: HashMap<RoomId, RoomKey>,
}

impl RoomGraph {
    /// Builds a graph from a document.
    ///
    /// # Errors
    ///
    /// - [`EmptyDocument`](delve_foundation::ErrorKind::EmptyDocument) if there are no rooms
    /// - [`DuplicateRoom`](delve_foundation::ErrorKind::DuplicateRoom) if two rooms share an id
    /// - [`DanglingConnection`](delve_foundation::ErrorKind::DanglingConnection) under
    ///   [`LinkPolicy::Strict`] when a target id is unknown
    pub fn load(document: &GraphDocument, policy: LinkPolicy) -> Result<Self> {
        if document.rooms.is_empty() {
            return Err(Error::empty_document());
        }

        let mut rooms = Vec::with_capacity(document.rooms.len());
        let mut index = HashMap::with_capacity(document.rooms.len());

        for record in &document.rooms {
            let key = RoomKey(rooms.len());
            if index.insert(record.id.clone(), key).is_some() {
                return Err(Error::duplicate_room(record.id.clone()));
            }
            rooms.push(Room::new(
                record.id.clone(),
                record.description.clone(),
                record.inventory.clone(),
            ));
        }

        for (slot, record) in document.rooms.iter().enumerate() {
            for (direction, target) in &record.connections {
                match index.get(target) {
                    Some(&target_key) => rooms[slot].connect(direction.clone(), target_key),
                    None => match policy {
                        LinkPolicy::Drop => {
                            debug!(room = %record.id, %direction, %target, "dropping dangling connection");
                        }
                        LinkPolicy::Strict => {
                            return Err(Error::dangling_connection(
                                record.id.clone(),
                                direction.clone(),
                                target.clone(),
                            ));
                        }
                    },
                }
            }
        }

        Ok(Self { rooms, index })
    }

    /// Returns the start room (the first room in the document).
    #[must_use]
    pub const fn start(&self) -> RoomKey {
        RoomKey(0)
    }

    /// Resolves a room id to its key.
    #[must_use]
    pub fn key(&self, id: &str) -> Option<RoomKey> {
        self.index.get(id).copied()
    }

    /// Returns the room for a key issued by this graph.
    #[must_use]
    pub fn room(&self, key: RoomKey) -> &Room {
        &self.rooms[key.0]
    }

    /// Returns the room for a key issued by this graph, mutably.
    pub fn room_mut(&mut self, key: RoomKey) -> &mut Room {
        &mut self.rooms[key.0]
    }

    /// Looks up a room by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Room> {
        self.key(id).map(|key| self.room(key))
    }

    /// Follows the connection `direction` out of `from`.
    #[must_use]
    pub fn exit(&self, from: RoomKey, direction: &str) -> Option<RoomKey> {
        self.room(from).connection(direction)
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always false: a loaded graph has at least the start room.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterates over all rooms in document order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomKey, &Room)> + '_ {
        self.rooms
            .iter()
            .enumerate()
            .map(|(slot, room)| (RoomKey(slot), room))
    }
}
