//! The fixed top-level vocabulary.
//!
//! A sanitized line is a command only if it is exactly one of these words.
//! There are no synonyms and no multi-word commands.

use std::fmt;

use crate::pending::PendingTag;

/// Text emitted by `help`.
pub const HELP_TEXT: &str = "Available commands: north, south, east, west, grab, attack, examine";

/// A top-level command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// List the available commands.
    Help,
    /// Move north.
    North,
    /// Move south.
    South,
    /// Move east.
    East,
    /// Move west.
    West,
    /// Pick up an item (asks which).
    Grab,
    /// Attack something (asks what).
    Attack,
    /// Examine something (asks what).
    Examine,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::North,
        Command::South,
        Command::East,
        Command::West,
        Command::Grab,
        Command::Attack,
        Command::Examine,
    ];

    /// Looks up a sanitized word.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.as_str() == word)
    }

    /// Returns the word for this command.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::North => "north",
            Command::South => "south",
            Command::East => "east",
            Command::West => "west",
            Command::Grab => "grab",
            Command::Attack => "attack",
            Command::Examine => "examine",
        }
    }

    /// Returns the direction token for movement commands.
    #[must_use]
    pub const fn direction(self) -> Option<&'static str> {
        match self {
            Command::North | Command::South | Command::East | Command::West => {
                Some(self.as_str())
            }
            _ => None,
        }
    }

    /// Returns the question and pending tag for multi-turn commands.
    #[must_use]
    pub const fn prompt(self) -> Option<(&'static str, PendingTag)> {
        match self {
            Command::Grab => Some(("What do you want to pick up?", PendingTag::Item)),
            Command::Attack => Some(("What do you want to attack?", PendingTag::Attack)),
            Command::Examine => Some(("What do you want to examine?", PendingTag::Examine)),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
