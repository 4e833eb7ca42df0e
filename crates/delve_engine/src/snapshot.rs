//! Session snapshots.
//!
//! A [`Snapshot`] is everything that changes during play: the player, the
//! current contents of every room, and the pending stack. Restoring replays
//! the original document through the loader and then lays the snapshot on
//! top, so the document itself is never stored twice.
//!
//! A snapshot that cannot be parsed, or whose current room no longer exists
//! in the document, is discarded and the game starts fresh. Restoring is
//! never an error on the snapshot's account; only a bad document fails.

use std::collections::BTreeMap;
use std::fmt;

use delve_foundation::{Error, Item, Result, RoomId};
use delve_parser::PendingStack;
use delve_world::{GraphDocument, Player, RoomGraph};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::GameConfig;
use crate::game::Game;

/// Restorable capture of a game's mutable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The player.
    pub player: PlayerSnapshot,
    /// Current inventory of every room, by room id.
    pub room_inventories: BTreeMap<RoomId, Vec<Item>>,
    /// Pending tags, bottom to top.
    pub stack: PendingStack,
}

/// The player part of a [`Snapshot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    /// Player health.
    pub health: i64,
    /// Items the player carries.
    pub inventory: Vec<Item>,
    /// Id of the room the player is in.
    pub current_room_id: RoomId,
}

impl Snapshot {
    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON or missing fields.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Encodes the snapshot as JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::serialization(e.to_string()))
    }
}

/// Why a restore fell back to a fresh game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FreshReason {
    /// The snapshot text could not be parsed.
    Unparseable(String),
    /// The snapshot's current room is not in the document.
    UnknownRoom(RoomId),
}

impl fmt::Display for FreshReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparseable(message) => write!(f, "unparseable snapshot: {message}"),
            Self::UnknownRoom(id) => write!(f, "snapshot room {id} is not in the document"),
        }
    }
}

/// How a restore went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The snapshot was applied.
    Resumed,
    /// The snapshot was discarded. The caller should clear it from storage.
    Fresh(FreshReason),
}

impl RestoreOutcome {
    /// Returns true when the stored snapshot should be purged.
    #[must_use]
    pub const fn discarded(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }
}

/// A restored game and how it was obtained.
#[derive(Debug)]
pub struct Restoration {
    /// The live game.
    pub game: Game,
    /// Whether the snapshot was used.
    pub outcome: RestoreOutcome,
}

impl Game {
    /// Captures the game's mutable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let graph = self.graph();
        let player = self.player();

        Snapshot {
            player: PlayerSnapshot {
                health: player.health(),
                inventory: player.inventory().to_vec(),
                current_room_id: graph.room(player.current_room()).id().clone(),
            },
            room_inventories: graph
                .iter()
                .map(|(_, room)| (room.id().clone(), room.inventory().to_vec()))
                .collect(),
            stack: self.pending().clone(),
        }
    }

    /// Restores a game from a document and snapshot JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error only if the document cannot be loaded.
    pub fn restore(
        document: &GraphDocument,
        snapshot: &str,
        config: GameConfig,
    ) -> Result<Restoration> {
        match Snapshot::from_json(snapshot) {
            Ok(snapshot) => Self::resume(document, &snapshot, config),
            Err(err) => Self::fresh(document, config, FreshReason::Unparseable(err.to_string())),
        }
    }

    /// Restores a game, returning only the game.
    ///
    /// # Errors
    ///
    /// Returns an error only if the document cannot be loaded.
    pub fn restore_game(document: &GraphDocument, snapshot: &str, config: GameConfig) -> Result<Game> {
        Self::restore(document, snapshot, config).map(|restored| restored.game)
    }

    /// Applies an already-parsed snapshot on top of a freshly loaded graph.
    ///
    /// # Errors
    ///
    /// Returns an error only if the document cannot be loaded.
    pub fn resume(
        document: &GraphDocument,
        snapshot: &Snapshot,
        config: GameConfig,
    ) -> Result<Restoration> {
        let mut graph = RoomGraph::load(document, config.link_policy)?;

        let current_room_id = &snapshot.player.current_room_id;
        let Some(here) = graph.key(current_room_id.as_str()) else {
            return Self::fresh(
                document,
                config,
                FreshReason::UnknownRoom(current_room_id.clone()),
            );
        };

        for (id, inventory) in &snapshot.room_inventories {
            if let Some(key) = graph.key(id.as_str()) {
                graph.room_mut(key).replace_inventory(inventory.clone());
            }
        }

        let player = Player::new(snapshot.player.health, here, snapshot.player.inventory.clone());
        let game = Game::from_parts(graph, player, snapshot.stack.clone(), config);

        Ok(Restoration {
            game,
            outcome: RestoreOutcome::Resumed,
        })
    }

    fn fresh(
        document: &GraphDocument,
        config: GameConfig,
        reason: FreshReason,
    ) -> Result<Restoration> {
        warn!(%reason, "discarding snapshot, starting fresh game");
        Ok(Restoration {
            game: Game::new(document, config)?,
            outcome: RestoreOutcome::Fresh(reason),
        })
    }
}
