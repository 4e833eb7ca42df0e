//! Input sanitizing, command vocabulary, and pending-interaction stack.
//!
//! # Pipeline
//!
//! ```text
//! "  GRAB! "
//!      │
//!      ▼
//! ┌─────────────────┐
//! │   SANITIZE      │  → "grab"
//! └─────────────────┘
//!      │
//!      ▼
//! ┌─────────────────┐
//! │  VOCABULARY     │  → Command::Grab
//! └─────────────────┘
//!      │
//!      ▼
//! ┌─────────────────┐
//! │  PENDING STACK  │  → push PendingTag::Item, wait for "key"
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`sanitize`] - The fixed normalization applied to every input line
//! - [`vocabulary`] - The closed set of top-level commands
//! - [`pending`] - Tags for multi-turn commands awaiting their argument

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod pending;
pub mod sanitize;
pub mod vocabulary;

pub use pending::{PendingStack, PendingTag};
pub use sanitize::sanitize;
pub use vocabulary::{Command, HELP_TEXT};
