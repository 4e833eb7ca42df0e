//! The command interpreter.
//!
//! A game is either [`State::Idle`], where each line is parsed as a fresh
//! command, or [`State::Awaiting`], where the next line answers the command
//! on top of the pending stack.
//!
//! ```text
//!            "grab"                      "key"
//!   IDLE ────────────▶ AWAITING(ITEM) ───────────▶ IDLE
//!    ▲  │ "north"                                   "Taken"
//!    └──┘ room description
//! ```
//!
//! Nothing here fails: unknown words, missing items, and unexpected answers
//! are all narrated as ordinary output lines.

use std::fmt;

use delve_foundation::Result;
use delve_parser::{Command, HELP_TEXT, PendingStack, PendingTag, sanitize};
use delve_world::{GraphDocument, Player, Room, RoomGraph};
use tracing::debug;

use crate::config::{GameConfig, MovePolicy};
use crate::hooks::GameHooks;

/// Interaction state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State<'a> {
    /// Every line is a top-level command.
    Idle,
    /// The next line answers the pending command with this tag.
    Awaiting(&'a PendingTag),
}

/// One live play-through.
pub struct Game {
    graph: RoomGraph,
    player: Player,
    pending: PendingStack,
    config: GameConfig,
    hooks: Option<Box<dyn GameHooks>>,
}

impl Game {
    /// Starts a fresh game in the document's first room.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded into a graph.
    pub fn new(document: &GraphDocument, config: GameConfig) -> Result<Self> {
        let graph = RoomGraph::load(document, config.link_policy)?;
        let player = Player::new(config.starting_health, graph.start(), Vec::new());
        Ok(Self::from_parts(graph, player, PendingStack::new(), config))
    }

    /// Assembles a game from already-built parts.
    ///
    /// `player` must have been placed in `graph`.
    #[must_use]
    pub fn from_parts(
        graph: RoomGraph,
        player: Player,
        pending: PendingStack,
        config: GameConfig,
    ) -> Self {
        Self {
            graph,
            player,
            pending,
            config,
            hooks: None,
        }
    }

    /// Installs host callbacks, replacing any previous ones.
    #[must_use]
    pub fn with_hooks(mut self, hooks: impl GameHooks + 'static) -> Self {
        self.set_hooks(hooks);
        self
    }

    /// Installs host callbacks, replacing any previous ones.
    pub fn set_hooks(&mut self, hooks: impl GameHooks + 'static) {
        self.hooks = Some(Box::new(hooks));
    }

    /// Returns the room graph.
    #[must_use]
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// Returns the player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the player, mutably. Hosts use this to apply damage.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Returns the pending-interaction stack.
    #[must_use]
    pub fn pending(&self) -> &PendingStack {
        &self.pending
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the interaction state.
    #[must_use]
    pub fn state(&self) -> State<'_> {
        match self.pending.peek() {
            Some(tag) => State::Awaiting(tag),
            None => State::Idle,
        }
    }

    /// Returns the room the player is in.
    #[must_use]
    pub fn current_room(&self) -> &Room {
        self.graph.room(self.player.current_room())
    }

    /// Returns the description of the player's room, for opening narration.
    #[must_use]
    pub fn describe_current_room(&self) -> &str {
        self.current_room().description()
    }

    /// Processes one line of input and returns the lines to show.
    ///
    /// Nothing is processed once health is zero or below. `None` returns no
    /// output and consumes no turn.
    pub fn next_step(&mut self, input: Option<&str>) -> Vec<String> {
        if !self.player.is_alive() {
            debug!(health = self.player.health(), "ignoring input, health depleted");
            self.notify_health_depleted();
            return Vec::new();
        }

        let Some(input) = input else {
            return Vec::new();
        };

        let mut output = self.process(input);
        debug!(
            input,
            pending = self.pending.len(),
            lines = output.len(),
            "processed input"
        );
        self.notify_command_processed(input, &mut output);
        output
    }

    fn process(&mut self, input: &str) -> Vec<String> {
        let word = sanitize(input);

        if let Some(tag) = self.pending.pop() {
            return self.answer(&tag, input, &word);
        }

        match Command::parse(&word) {
            Some(command) => self.execute(command),
            None => vec![format!("I don't know the word \"{input}\".")],
        }
    }

    fn execute(&mut self, command: Command) -> Vec<String> {
        if let Some(direction) = command.direction() {
            return self.go(direction);
        }
        if let Some((question, tag)) = command.prompt() {
            self.pending.push(tag);
            return vec![question.to_string()];
        }
        vec![HELP_TEXT.to_string()]
    }

    fn go(&mut self, direction: &str) -> Vec<String> {
        let moved = self.player.travel(&self.graph, direction);
        if !moved {
            if let MovePolicy::Narrate(message) = &self.config.move_policy {
                return vec![message.clone()];
            }
        }
        vec![self.describe_current_room().to_string()]
    }

    fn answer(&mut self, tag: &PendingTag, input: &str, word: &str) -> Vec<String> {
        match tag {
            PendingTag::Item => self.take(word),
            PendingTag::Examine => self.examine(word),
            PendingTag::Attack => vec![word.to_string()],
            PendingTag::Other(_) => vec![format!("Unexpected input: \"{input}\".")],
        }
    }

    fn take(&mut self, word: &str) -> Vec<String> {
        let here = self.player.current_room();
        let found = self.graph.room(here).find_item(word).map(|item| item.id.clone());

        match found.and_then(|id| self.graph.room_mut(here).remove_item(&id)) {
            Some(item) => {
                self.player.add_item(item);
                vec!["Taken".to_string()]
            }
            None => vec![format!("You can't see any \"{word}\" here.")],
        }
    }

    /// Describes a visible item, or echoes the word back.
    fn examine(&self, word: &str) -> Vec<String> {
        self.current_room()
            .find_item(word)
            .or_else(|| self.player.inventory().iter().find(|item| item.answers_to(word)))
            .map_or_else(|| vec![word.to_string()], |item| vec![item.description.clone()])
    }

    fn notify_command_processed(&mut self, input: &str, output: &mut Vec<String>) {
        if let Some(mut hooks) = self.hooks.take() {
            hooks.on_command_processed(self, input, output);
            self.hooks = Some(hooks);
        }
    }

    fn notify_health_depleted(&mut self) {
        if let Some(mut hooks) = self.hooks.take() {
            hooks.on_health_depleted(self);
            self.hooks = Some(hooks);
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("graph", &self.graph)
            .field("player", &self.player)
            .field("pending", &self.pending)
            .field("config", &self.config)
            .field("hooks", &self.hooks.is_some())
            .finish()
    }
}
