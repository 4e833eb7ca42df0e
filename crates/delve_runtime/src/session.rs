//! Play sessions.
//!
//! A [`PlaySession`] binds a live [`Game`] to a save slot. Each submitted
//! line comes back as a transcript block that starts with the echoed input,
//! and the game is saved after every turn.

use delve_engine::{Game, GameConfig};
use delve_foundation::Result;
use delve_world::GraphDocument;
use tracing::debug;

use crate::store::{SaveStore, resume};

/// A game bound to a save slot.
pub struct PlaySession<S: SaveStore> {
    game: Game,
    document: GraphDocument,
    config: GameConfig,
    store: S,
    slot: String,
}

impl<S: SaveStore> PlaySession<S> {
    /// Opens `slot`, resuming a saved game if there is a usable one.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded or the store fails.
    pub fn open(
        document: GraphDocument,
        mut store: S,
        slot: impl Into<String>,
        config: GameConfig,
    ) -> Result<Self> {
        let slot = slot.into();
        let game = resume(&document, &mut store, &slot, config.clone())?;
        Ok(Self {
            game,
            document,
            config,
            store,
            slot,
        })
    }

    /// Returns the live game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the live game, mutably.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the save slot name.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Returns the opening narration: the current room's description.
    #[must_use]
    pub fn opening(&self) -> Vec<String> {
        vec![self.game.describe_current_room().to_string()]
    }

    /// Plays one line and returns its transcript block.
    ///
    /// Blank lines are ignored and return an empty block without a turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game cannot be saved.
    pub fn submit(&mut self, line: &str) -> Result<Vec<String>> {
        if line.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut block = vec![format!("> {line}")];
        block.extend(self.game.next_step(Some(line)));
        self.save()?;
        Ok(block)
    }

    /// Writes the current state to the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the store fails.
    pub fn save(&mut self) -> Result<()> {
        let text = self.game.snapshot().to_json()?;
        debug!(slot = %self.slot, bytes = text.len(), "saving game");
        self.store.save(&self.slot, &text)
    }

    /// Discards the saved game and starts over from the first room.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded or the store fails.
    pub fn restart(&mut self) -> Result<()> {
        self.store.purge(&self.slot)?;
        self.game = Game::new(&self.document, self.config.clone())?;
        Ok(())
    }

    /// Consumes the session, returning its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
