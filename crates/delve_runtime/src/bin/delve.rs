//! Delve CLI entry point.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use delve_engine::{GameConfig, MovePolicy};
use delve_foundation::{Error, Result};
use delve_runtime::{DirStore, PlaySession, Repl, SaveStore, ScriptEditor, load_document};
use delve_world::LinkPolicy;
use tracing_subscriber::EnvFilter;

/// Play a room-graph adventure in the terminal.
#[derive(Parser, Debug)]
#[command(name = "delve", about = "Play a room-graph text adventure", version)]
struct Args {
    /// Path to the room-graph JSON document
    document: PathBuf,

    /// Directory holding save slots
    #[arg(long, default_value = "saves")]
    save_dir: PathBuf,

    /// Save slot to resume and autosave into
    #[arg(long, default_value = "default")]
    slot: String,

    /// Reject documents whose connections name unknown rooms
    #[arg(long)]
    strict_links: bool,

    /// Say "You can't go that way." instead of repeating the room description
    #[arg(long)]
    narrate_blocked_moves: bool,

    /// Starting health for new games
    #[arg(long)]
    health: Option<i64>,

    /// Read commands from stdin without line editing and echo them
    #[arg(long)]
    batch: bool,

    /// Discard the saved game in the slot before starting
    #[arg(long)]
    fresh: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        if self.strict_links {
            config = config.with_link_policy(LinkPolicy::Strict);
        }
        if self.narrate_blocked_moves {
            config = config.with_move_policy(MovePolicy::narrated());
        }
        if let Some(health) = self.health {
            config = config.with_starting_health(health);
        }
        config
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = &e.context {
                eprintln!("{context}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let document = load_document(&args.document)?;
    let mut store = DirStore::open(&args.save_dir)?;
    if args.fresh {
        store.purge(&args.slot)?;
    }

    let session = PlaySession::open(document, store, args.slot.as_str(), args.config())?;

    if args.batch {
        let lines = io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| Error::io(format!("failed to read stdin: {e}")))?;
        Repl::with_editor(session, ScriptEditor::new(lines))
            .without_banner()
            .with_echo()
            .run()
    } else {
        Repl::new(session)?.run()
    }
}
