//! Error types for the Delve system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only structural problems surface here: a room-graph document that cannot
//! be loaded, or host-side I/O and encoding failures. Anything a player types
//! is answered with narrative text and never becomes an [`Error`].

use std::fmt;

use thiserror::Error;

use crate::id::RoomId;

/// Result alias used throughout Delve.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Delve operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an empty document error.
    #[must_use]
    pub fn empty_document() -> Self {
        Self::new(ErrorKind::EmptyDocument)
    }

    /// Creates a duplicate room error.
    #[must_use]
    pub fn duplicate_room(id: RoomId) -> Self {
        Self::new(ErrorKind::DuplicateRoom(id))
    }

    /// Creates a dangling connection error.
    #[must_use]
    pub fn dangling_connection(room: RoomId, direction: impl Into<String>, target: RoomId) -> Self {
        Self::new(ErrorKind::DanglingConnection {
            room,
            direction: direction.into(),
            target,
        })
    }

    /// Creates an invalid document error.
    #[must_use]
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDocument(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError(message.into()))
    }

    /// Creates an invalid save slot error.
    #[must_use]
    pub fn invalid_slot(slot: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSlot(slot.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The document has no rooms, so no start room can be chosen.
    #[error("room-graph document has no rooms")]
    EmptyDocument,

    /// Two rooms in one document share an id.
    #[error("duplicate room id: {0}")]
    DuplicateRoom(RoomId),

    /// A connection points at a room id that is not in the document.
    #[error("room {room} connects {direction} to unknown room {target}")]
    DanglingConnection {
        /// The room that declares the connection.
        room: RoomId,
        /// The direction token of the connection.
        direction: String,
        /// The unresolved target id.
        target: RoomId,
    },

    /// The document could not be parsed.
    #[error("invalid room-graph document: {0}")]
    InvalidDocument(String),

    /// Encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// A save slot name cannot be used as a storage key.
    #[error("invalid save slot name: {0:?}")]
    InvalidSlot(String),

    /// Host-side I/O failed.
    #[error("i/o error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or save slot.
    pub source: Option<String>,
    /// Chain of operations that led to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
