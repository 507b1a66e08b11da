//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI. Anything typed is a guess unless it
//! starts with `:`, which marks a command (`:new`, `:medium`, `:quit`...).

use crate::core::Difficulty;
use crate::output::formatters::{format_duration, guess_row, share_text};
use crate::output::{print_board, print_keyboard, print_ledger, print_round_result};
use crate::round::{Clock, GameError, RoundController};
use crate::storage::Storage;
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};

/// Prefix that turns a line into a command; no word contains it
pub const COMMAND_PREFIX: char = ':';

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewRound,
    Tier(Difficulty),
    Scores,
    GiveUp,
    Help,
    Guess(String),
}

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Solved,
    Quit,
}

/// Parse a line of input
///
/// # Examples
/// ```
/// use wordle_game::commands::simple::{Command, parse_command};
/// use wordle_game::core::Difficulty;
///
/// assert_eq!(parse_command("medium"), Command::Guess("medium".to_string()));
/// assert_eq!(parse_command(":medium"), Command::Tier(Difficulty::Medium));
/// ```
#[must_use]
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let Some(name) = input.strip_prefix(COMMAND_PREFIX) else {
        return Command::Guess(input.to_string());
    };

    match name.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewRound,
        "scores" => Command::Scores,
        "giveup" | "give up" => Command::GiveUp,
        other => other.parse().map_or(Command::Help, Command::Tier),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no word
/// is available for the starting difficulty.
pub fn run_simple<W: WordSource, S: Storage, C: Clock>(
    controller: &mut RoundController<W, S, C>,
    difficulty: Difficulty,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word. After each guess you get per-letter feedback:\n");
    println!("  - {} letter is in the right spot", " G ".black().on_green());
    println!("  - {} letter is elsewhere in the word", " Y ".black().on_yellow());
    println!("  - {} letter is not in the word\n", " - ".white().on_bright_black());
    print_help();

    let mut difficulty = difficulty;
    start_round(controller, difficulty).map_err(|e| e.to_string())?;

    loop {
        let prompt = match controller.round() {
            Some(round) => format!(
                "Guess {} ({} letters, {})",
                round.history().len() + 1,
                round.target().len(),
                format_duration(controller.elapsed_seconds())
            ),
            None => "Command".to_string(),
        };
        let command = parse_command(&get_user_input(&prompt)?);

        match apply_command(controller, &mut difficulty, command) {
            Flow::Continue => {}
            Flow::Quit => break,
            Flow::Solved => match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => start_round(controller, difficulty).map_err(|e| e.to_string())?,
                _ => break,
            },
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Carry out one command against the controller
///
/// A tier switch only takes effect if a round on the new tier could start.
pub fn apply_command<W: WordSource, S: Storage, C: Clock>(
    controller: &mut RoundController<W, S, C>,
    difficulty: &mut Difficulty,
    command: Command,
) -> Flow {
    match command {
        Command::Quit => return Flow::Quit,
        Command::Help => print_help(),
        Command::NewRound => {
            if let Err(e) = start_round(controller, *difficulty) {
                println!("❌ {e}\n");
            }
        }
        Command::Tier(tier) => match start_round(controller, tier) {
            Ok(()) => *difficulty = tier,
            Err(e) => println!("❌ {e}\n"),
        },
        Command::Scores => {
            print_ledger(&[(
                *difficulty,
                controller.high_scores().top(*difficulty).to_vec(),
            )]);
        }
        Command::GiveUp => {
            if let Some(round) = controller.abandon() {
                println!(
                    "\nThe word was {}. Type ':new' for another round.\n",
                    round.target().text().to_uppercase().bright_yellow().bold()
                );
            }
        }
        Command::Guess(guess) => return submit_guess(controller, &guess),
    }
    Flow::Continue
}

fn submit_guess<W: WordSource, S: Storage, C: Clock>(
    controller: &mut RoundController<W, S, C>,
    guess: &str,
) -> Flow {
    match controller.submit_guess(guess) {
        Ok(outcome) => {
            let Some(round) = controller.round() else {
                return Flow::Continue;
            };
            if let Some(last) = round.history().last() {
                println!("\n  {}", guess_row(&last.guess, &last.feedback));
            }

            if let Some(result) = outcome.result {
                println!();
                print_board(round);
                print_round_result(round.difficulty(), round.target(), &result);
                println!("{}\n", share_text(round, result.elapsed_secs));
                return Flow::Solved;
            }
            print_keyboard(round);
        }
        Err(GameError::NoActiveRound) => {
            println!("No round in progress. Type ':new' to start one.\n");
        }
        Err(e) => println!("❌ {e}\n"),
    }
    Flow::Continue
}

fn start_round<W: WordSource, S: Storage, C: Clock>(
    controller: &mut RoundController<W, S, C>,
    difficulty: Difficulty,
) -> Result<(), GameError> {
    let round = controller.start(difficulty)?;
    println!(
        "\n🔄 New {} round: {} letters\n",
        difficulty.name().bright_cyan().bold(),
        round.target().len()
    );
    Ok(())
}

fn print_help() {
    println!("Commands: ':new', ':easy'/':medium'/':hard', ':scores', ':giveup', ':quit'\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        // EOF behaves like quit
        return Ok(format!("{COMMAND_PREFIX}quit"));
    }

    Ok(input.trim().to_string())
}
