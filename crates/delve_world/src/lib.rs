//! Room graph loading, rooms, and player state for Delve.
//!
//! This crate provides:
//! - [`GraphDocument`] - The room-graph document as authored by the host
//! - [`RoomGraph`] - An arena of [`Room`]s keyed by id, built by the loader
//! - [`Player`] - Health, inventory, and current location
//!
//! Rooms form a graph with cycles. The graph owns every room and
//! connections are stored as [`RoomKey`]s into the arena, resolved once at
//! load time, so no room ever owns another.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod document;
pub mod graph;
pub mod player;
pub mod room;

pub use document::{GraphDocument, RoomRecord};
pub use graph::{LinkPolicy, RoomGraph};
pub use player::Player;
pub use room::{Room, RoomKey};
