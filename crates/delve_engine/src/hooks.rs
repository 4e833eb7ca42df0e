//! Host callbacks.
//!
//! The interpreter evaluates no win or loss rules beyond health. Hosts that
//! want them (required items, a goal room) observe the game through these
//! callbacks instead of changing the interpreter.

use crate::game::Game;

/// Callbacks invoked by [`Game::next_step`].
///
/// Every method has a no-op default.
pub trait GameHooks {
    /// Called after a line has been processed, with the output produced so
    /// far. Lines pushed onto `output` are returned to the caller.
    fn on_command_processed(&mut self, _game: &Game, _input: &str, _output: &mut Vec<String>) {}

    /// Called whenever a line is refused because health is zero or below.
    fn on_health_depleted(&mut self, _game: &Game) {}
}
