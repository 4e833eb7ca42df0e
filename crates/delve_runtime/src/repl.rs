//! The interactive game loop.

use std::io::{self, Write};

use delve_foundation::{Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::PlaySession;
use crate::store::SaveStore;

/// Host command that discards the save and starts over.
pub const RESTART_COMMAND: &str = ":restart";

/// Host command that leaves the loop.
pub const QUIT_COMMAND: &str = ":quit";

/// The interactive REPL.
pub struct Repl<S: SaveStore, E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The game being played.
    session: PlaySession<S>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Whether to print the `> input` line of each block.
    echo_input: bool,

    /// Primary prompt.
    prompt: String,
}

impl<S: SaveStore> Repl<S, RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: PlaySession<S>) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(session, editor))
    }
}

impl<S: SaveStore, E: LineEditor> Repl<S, E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(session: PlaySession<S>, editor: E) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
            echo_input: false,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Prints each input line back before its output.
    ///
    /// The terminal already shows what was typed, so this is for piped input.
    #[must_use]
    pub const fn with_echo(mut self) -> Self {
        self.echo_input = true;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &PlaySession<S> {
        &self.session
    }

    /// Consumes the REPL, returning its session.
    #[must_use]
    pub fn into_session(self) -> PlaySession<S> {
        self.session
    }

    /// Returns the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs the loop against standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or saving fails.
    pub fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Runs the loop, writing the transcript to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input, saving, or writing fails.
    pub fn run_with<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.show_banner {
            print_banner(out)?;
        }
        print_block(out, &self.session.opening())?;

        while self.read_eval_print(out)? {}

        if self.show_banner {
            writeln!(out, "\nGoodbye!").map_err(write_error)?;
        }
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print<W: Write>(&mut self, out: &mut W) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match trimmed {
            QUIT_COMMAND => return Ok(false),
            RESTART_COMMAND => {
                self.session.restart()?;
                print_block(out, &self.session.opening())?;
                return Ok(true);
            }
            _ => {}
        }

        let block = self.session.submit(&input)?;
        let skip = usize::from(!self.echo_input);
        print_block(out, &block[skip..])?;
        Ok(true)
    }
}

fn print_block<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}").map_err(write_error)?;
    }
    writeln!(out).map_err(write_error)
}

fn print_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\x1b[1;36mDelve v{}\x1b[0m", env!("CARGO_PKG_VERSION")).map_err(write_error)?;
    writeln!(
        out,
        "Type `help` for commands, `{RESTART_COMMAND}` to start over, Ctrl+D to exit.\n"
    )
    .map_err(write_error)
}

fn write_error(e: io::Error) -> Error {
    Error::io(format!("failed to write output: {e}"))
}
