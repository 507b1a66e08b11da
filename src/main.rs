//! Wordle - CLI
//!
//! Word-guessing game with TUI and CLI modes, three difficulty tiers and a
//! persisted high-score ledger.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{check_guess, load_scores, run_simple},
    config::{DEFAULT_DATA_DIR, GameConfig},
    core::Difficulty,
    interactive::{App, run_tui},
    output::{print_check_result, print_ledger},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word in as few tries and as little time as possible",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (5 letters, default), medium (6) or hard (7)
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: Difficulty,

    /// Directory for the high-score ledger and log file
    #[arg(long, global = true, env = "WORDLE_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Custom word file (one word per line) replacing the built-in lists
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Log filter, e.g. 'info' or 'wordle_game=debug'
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    log: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the feedback a guess would get against a target
    Check {
        /// The hidden word
        target: String,

        /// The guess to evaluate
        guess: String,
    },

    /// Show the high-score ledger
    Scores {
        /// Only show this tier
        tier: Option<Difficulty>,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            difficulty: self.difficulty,
            data_dir: self.data_dir.clone(),
            wordlist: self.wordlist.clone(),
            ..GameConfig::default()
        }
    }
}

/// Send logs to the data directory, falling back to stderr
fn init_logging(filter: &str, config: &GameConfig) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let file = fs::create_dir_all(&config.data_dir).and_then(|()| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())
    });

    let result = match file {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init(),
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
    };
    if let Err(e) = result {
        eprintln!("Logging disabled: {e}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_logging(&cli.log, &config);
    debug!(?config, "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { target, guess } => run_check_command(&target, &guess),
        Commands::Scores { tier } => {
            run_scores_command(&config, tier);
            Ok(())
        }
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let controller = config
        .controller()
        .context("failed to load word list")?;
    run_tui(App::new(controller, config.difficulty))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut controller = config
        .controller()
        .context("failed to load word list")?;
    run_simple(&mut controller, config.difficulty).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let result = check_guess(target, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_scores_command(config: &GameConfig, tier: Option<Difficulty>) {
    let tiers = load_scores(config.storage(), tier);
    print_ledger(&tiers);
}
