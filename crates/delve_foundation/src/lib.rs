//! Core identifiers, items, and error types for Delve.
//!
//! This crate provides:
//! - [`RoomId`] and [`ItemId`] - Stable string identifiers from the room-graph document
//! - [`Item`] - Immutable item records that move between inventories
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;
pub mod item;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use id::{ItemId, RoomId};
pub use item::Item;
