//! The room-graph document.
//!
//! This is the JSON shape the host stores for a game:
//!
//! ```json
//! { "rooms": [ { "id": "r1", "description": "Entry",
//!                "inventory": [], "connections": { "north": "r2" } } ] }
//! ```
//!
//! The first room is the start room for a fresh game. Fields the editor adds
//! (room names, map positions) are ignored.

use std::collections::BTreeMap;

use delve_foundation::{Error, Item, Result, RoomId};
use serde::{Deserialize, Serialize};

/// A complete room-graph document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Rooms in authoring order.
    pub rooms: Vec<RoomRecord>,
}

/// One room as it appears in the document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Room id, unique within the document.
    pub id: RoomId,
    /// Text shown when the player enters.
    pub description: String,
    /// Items initially in the room.
    #[serde(default)]
    pub inventory: Vec<Item>,
    /// Direction token to target room id.
    #[serde(default)]
    pub connections: BTreeMap<String, RoomId>,
}

impl RoomRecord {
    /// Creates a record with no items and no connections.
    #[must_use]
    pub fn new(id: impl Into<RoomId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            inventory: Vec::new(),
            connections: BTreeMap::new(),
        }
    }

    /// Adds an item to the record.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.inventory.push(item);
        self
    }

    /// Adds a connection to the record.
    #[must_use]
    pub fn with_connection(
        mut self,
        direction: impl Into<String>,
        target: impl Into<RoomId>,
    ) -> Self {
        self.connections.insert(direction.into(), target.into());
        self
    }
}

impl GraphDocument {
    /// Creates a document from room records.
    #[must_use]
    pub fn new(rooms: Vec<RoomRecord>) -> Self {
        Self { rooms }
    }

    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidDocument`](delve_foundation::ErrorKind::InvalidDocument)
    /// if the text is not a valid document.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::invalid_document(e.to_string()))
    }

    /// Encodes the document as JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Returns the start room record, if any.
    #[must_use]
    pub fn start_room(&self) -> Option<&RoomRecord> {
        self.rooms.first()
    }
}
