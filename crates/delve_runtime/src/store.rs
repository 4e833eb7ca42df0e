//! Save-slot storage.
//!
//! The host keeps one snapshot per play-through under an opaque slot name.
//! [`resume`] is the one place that decides between a restored and a fresh
//! game, and it clears slots whose snapshot had to be discarded.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use delve_engine::{Game, GameConfig, RestoreOutcome};
use delve_foundation::{Error, Result};
use delve_world::GraphDocument;
use tracing::{info, warn};

/// Storage for snapshot JSON, keyed by save slot.
pub trait SaveStore {
    /// Returns the snapshot stored in `slot`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self, slot: &str) -> Result<Option<String>>;

    /// Stores `snapshot` in `slot`, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&mut self, slot: &str, snapshot: &str) -> Result<()>;

    /// Removes whatever is stored in `slot`. Purging an empty slot is fine.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn purge(&mut self, slot: &str) -> Result<()>;
}

/// In-memory store, for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true when no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SaveStore for MemoryStore {
    fn load(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn save(&mut self, slot: &str, snapshot: &str) -> Result<()> {
        self.slots.insert(slot.to_string(), snapshot.to_string());
        Ok(())
    }

    fn purge(&mut self, slot: &str) -> Result<()> {
        self.slots.remove(slot);
        Ok(())
    }
}

/// Directory store: one `<slot>.json` file per slot.
#[derive(Clone, Debug)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            Error::io(format!("failed to create directory '{}': {e}", root.display()))
        })?;
        Ok(Self { root })
    }

    /// Returns the store's directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Slot names become file names, so only `[A-Za-z0-9_-]` is accepted.
    fn path(&self, slot: &str) -> Result<PathBuf> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::invalid_slot(slot));
        }
        Ok(self.root.join(format!("{slot}.json")))
    }
}

impl SaveStore for DirStore {
    fn load(&self, slot: &str) -> Result<Option<String>> {
        let path = self.path(slot)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(format!(
                "failed to read file '{}': {e}",
                path.display()
            ))),
        }
    }

    fn save(&mut self, slot: &str, snapshot: &str) -> Result<()> {
        let path = self.path(slot)?;
        fs::write(&path, snapshot)
            .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))
    }

    fn purge(&mut self, slot: &str) -> Result<()> {
        let path = self.path(slot)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io(format!(
                "failed to remove file '{}': {e}",
                path.display()
            ))),
        }
    }
}

/// Opens the game stored in `slot`, or a fresh one.
///
/// An empty slot starts a fresh game. A slot whose snapshot is discarded
/// during restore is purged.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or the store fails.
pub fn resume<S: SaveStore + ?Sized>(
    document: &GraphDocument,
    store: &mut S,
    slot: &str,
    config: GameConfig,
) -> Result<Game> {
    let Some(text) = store.load(slot)? else {
        info!(slot, "no saved game, starting fresh");
        return Game::new(document, config);
    };

    let restored = Game::restore(document, &text, config)?;
    match &restored.outcome {
        RestoreOutcome::Resumed => info!(slot, "resumed saved game"),
        RestoreOutcome::Fresh(reason) => {
            warn!(slot, %reason, "purging unusable save slot");
            store.purge(slot)?;
        }
    }
    Ok(restored.game)
}
