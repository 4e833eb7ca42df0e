//! Command interpreter and session snapshots for Delve.
//!
//! This crate provides:
//! - [`Game`] - One live play-through: room graph, player, pending stack
//! - [`GameConfig`] - Starting health and the load and movement policies
//! - [`GameHooks`] - Callbacks a host uses to layer rules on top
//! - [`Snapshot`] - Plain, restorable capture of all mutable game state
//!
//! A game is single-threaded and synchronous: [`Game::next_step`] fully
//! processes one line before returning. Independent games share nothing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod game;
pub mod hooks;
pub mod snapshot;

pub use config::{GameConfig, MovePolicy};
pub use game::{Game, State};
pub use hooks::GameHooks;
pub use snapshot::{FreshReason, PlayerSnapshot, Restoration, RestoreOutcome, Snapshot};
