//! Delve - Room-graph text adventure interpreter
//!
//! This crate re-exports all layers of the Delve system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: delve_runtime    - Save slots, play sessions, REPL, CLI
//! Layer 3: delve_engine     - Command interpreter, snapshots, hooks
//! Layer 2: delve_parser     - Sanitizer, vocabulary, pending-interaction stack
//! Layer 1: delve_world      - Room graph loader, rooms, player
//! Layer 0: delve_foundation - Core types (RoomId, ItemId, Item, Error)
//! ```

pub use delve_engine as engine;
pub use delve_foundation as foundation;
pub use delve_parser as parser;
pub use delve_runtime as runtime;
pub use delve_world as world;
