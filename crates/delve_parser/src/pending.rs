//! Pending-interaction stack.
//!
//! A multi-turn command such as `grab` pushes a tag and the next input line
//! is consumed as its argument. Exactly one tag is popped per line, in
//! strict LIFO order. In practice the stack is empty or one deep, but any
//! depth round-trips through a snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag of a command waiting for its argument.
///
/// Tags persist as plain strings. A string outside the known set survives
/// as [`PendingTag::Other`] so saved stacks restore verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PendingTag {
    /// `grab` is waiting for an item name.
    Item,
    /// `attack` is waiting for a target.
    Attack,
    /// `examine` is waiting for a target.
    Examine,
    /// Unrecognized tag carried over from saved data.
    Other(String),
}

impl PendingTag {
    /// Returns the persisted form of the tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            PendingTag::Item => "ITEM",
            PendingTag::Attack => "ATTACK",
            PendingTag::Examine => "EXAMINE",
            PendingTag::Other(tag) => tag,
        }
    }
}

impl From<String> for PendingTag {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "ITEM" => PendingTag::Item,
            "ATTACK" => PendingTag::Attack,
            "EXAMINE" => PendingTag::Examine,
            _ => PendingTag::Other(tag),
        }
    }
}

impl From<&str> for PendingTag {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<PendingTag> for String {
    fn from(tag: PendingTag) -> Self {
        match tag {
            PendingTag::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PendingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// LIFO stack of pending tags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingStack(Vec<PendingTag>);

impl PendingStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a tag on top.
    pub fn push(&mut self, tag: PendingTag) {
        self.0.push(tag);
    }

    /// Pops the top tag.
    pub fn pop(&mut self) -> Option<PendingTag> {
        self.0.pop()
    }

    /// Returns the top tag without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&PendingTag> {
        self.0.last()
    }

    /// Returns the number of pending tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &PendingTag> + '_ {
        self.0.iter()
    }

    /// Returns the tags as persisted strings, bottom to top.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|tag| tag.as_str().to_string()).collect()
    }
}

impl FromIterator<PendingTag> for PendingStack {
    fn from_iter<I: IntoIterator<Item = PendingTag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<S: Into<PendingTag>> From<Vec<S>> for PendingStack {
    fn from(tags: Vec<S>) -> Self {
        tags.into_iter().map(Into::into).collect()
    }
}
