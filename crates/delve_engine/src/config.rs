//! Configuration for a game instance.

use delve_world::LinkPolicy;

/// Message used by [`MovePolicy::narrated`].
pub const BLOCKED_MOVE_MESSAGE: &str = "You can't go that way.";

/// What the interpreter says when a move has no matching connection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MovePolicy {
    /// Repeat the current room's description, as if the move happened.
    #[default]
    Silent,
    /// Emit the given message instead of the description.
    Narrate(String),
}

impl MovePolicy {
    /// Narrates blocked moves with the standard message.
    #[must_use]
    pub fn narrated() -> Self {
        Self::Narrate(BLOCKED_MOVE_MESSAGE.to_string())
    }
}

/// Configuration for a game instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Health of a player in a fresh game.
    pub starting_health: i64,

    /// Handling of connections to unknown rooms at load time.
    pub link_policy: LinkPolicy,

    /// Narration of moves that go nowhere.
    pub move_policy: MovePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: 100,
            link_policy: LinkPolicy::Drop,
            move_policy: MovePolicy::Silent,
        }
    }
}

impl GameConfig {
    /// Creates a configuration that rejects dangling connections and
    /// narrates blocked moves.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            link_policy: LinkPolicy::Strict,
            move_policy: MovePolicy::narrated(),
            ..Self::default()
        }
    }

    /// Builder method to set starting health.
    #[must_use]
    pub fn with_starting_health(mut self, health: i64) -> Self {
        self.starting_health = health;
        self
    }

    /// Builder method to set the link policy.
    #[must_use]
    pub fn with_link_policy(mut self, policy: LinkPolicy) -> Self {
        self.link_policy = policy;
        self
    }

    /// Builder method to set the move policy.
    #[must_use]
    pub fn with_move_policy(mut self, policy: MovePolicy) -> Self {
        self.move_policy = policy;
        self
    }
}
