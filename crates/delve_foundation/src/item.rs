//! Item records.

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// An item that lives in exactly one inventory at a time.
///
/// Items never change once loaded. Picking one up relocates the record from
/// a room's inventory to the player's.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id, used to match items across save and restore.
    pub id: ItemId,
    /// Player-facing noun used for command matching.
    pub name: String,
    /// Narrative description.
    pub description: String,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns true if `word` names this item, ignoring case.
    ///
    /// `word` is expected to be sanitized input, which is already lowercase.
    #[must_use]
    pub fn answers_to(&self, word: &str) -> bool {
        self.name.to_lowercase() == word
    }
}
