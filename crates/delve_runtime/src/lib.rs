//! Save slots, play sessions, REPL, and CLI for Delve.
//!
//! This crate provides:
//! - [`PlaySession`] - A game bound to a save slot, autosaving every turn
//! - [`SaveStore`] - Host storage for snapshots ([`MemoryStore`], [`DirStore`])
//! - [`Repl`] - Interactive play loop over a [`LineEditor`]
//! - Snapshot encoding to and from JSON and `MessagePack`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;
pub mod serialize;
pub mod session;
pub mod store;

pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptEditor};
pub use repl::{QUIT_COMMAND, RESTART_COMMAND, Repl};
pub use serialize::{from_bytes, load_document, load_from_file, save_to_file, to_bytes};
pub use session::PlaySession;
pub use store::{DirStore, MemoryStore, SaveStore, resume};
