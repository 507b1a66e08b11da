//! TUI application state and logic

use crate::core::Difficulty;
use crate::output::formatters::{format_duration, ordinal};
use crate::round::{Clock, GameError, Round, RoundController};
use crate::storage::Storage;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How long the event loop waits for a key before redrawing the timer
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Messages kept in the message panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<W, S, C> {
    pub controller: RoundController<W, S, C>,
    pub difficulty: Difficulty,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<W: WordSource, S: Storage, C: Clock> App<W, S, C> {
    #[must_use]
    pub fn new(controller: RoundController<W, S, C>, difficulty: Difficulty) -> Self {
        Self {
            controller,
            difficulty,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Type a word and press Enter. Tab gives up, Esc quits.".to_string(),
                style: MessageStyle::Info,
            }],
            input_mode: InputMode::RoundOver,
            should_quit: false,
        }
    }

    /// The current round, if any
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.controller.round()
    }

    /// Letters a guess needs in the current round
    #[must_use]
    pub fn target_length(&self) -> usize {
        self.round()
            .map_or(self.difficulty.word_length(), |round| round.target().len())
    }

    pub fn new_round(&mut self) {
        self.start_round(self.difficulty);
    }

    /// Switch tier and start a round on it
    ///
    /// If the tier has no words the current tier and round are kept.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.start_round(difficulty);
    }

    fn start_round(&mut self, difficulty: Difficulty) {
        match self.controller.start(difficulty) {
            Ok(round) => {
                let text = format!(
                    "New {} round: {} letters",
                    difficulty.name(),
                    round.target().len()
                );
                self.difficulty = difficulty;
                self.input_buffer.clear();
                self.add_message(&text, MessageStyle::Info);
                self.input_mode = InputMode::Guessing;
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                let in_progress = self.round().is_some_and(|round| !round.is_finished());
                self.input_mode = if in_progress {
                    InputMode::Guessing
                } else {
                    InputMode::RoundOver
                };
            }
        }
    }

    pub fn type_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.target_length() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();
        match self.controller.submit_guess(&input) {
            Ok(outcome) => {
                self.input_buffer.clear();
                if let Some(result) = outcome.result {
                    let mut text = format!(
                        "Solved in {} guesses ({}), score {}",
                        result.guesses,
                        format_duration(result.elapsed_secs),
                        result.score
                    );
                    if let Some(rank) = result.rank {
                        text.push_str(&format!(" ({} place)", ordinal(rank)));
                    }
                    self.add_message(&text, MessageStyle::Success);
                    self.add_message(
                        "Press 'n' for a new round, 1/2/3 to change tier, 'q' to quit.",
                        MessageStyle::Info,
                    );
                    self.input_mode = InputMode::RoundOver;
                }
            }
            Err(e @ GameError::LengthMismatch { .. }) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Err(e) => {
                self.input_buffer.clear();
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn give_up(&mut self) {
        self.input_buffer.clear();
        if let Some(round) = self.controller.abandon() {
            let text = format!("The word was {}", round.target().text().to_uppercase());
            self.add_message(&text, MessageStyle::Info);
        }
        self.input_mode = InputMode::RoundOver;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Digits never collide with letters, so tier switching works in both modes
        let tier = match key.code {
            KeyCode::Char('1') => Some(Difficulty::Easy),
            KeyCode::Char('2') => Some(Difficulty::Medium),
            KeyCode::Char('3') => Some(Difficulty::Hard),
            _ => None,
        };
        if let Some(difficulty) = tier {
            self.set_difficulty(difficulty);
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_round(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.give_up(),
                KeyCode::Char(c) => self.type_letter(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource, S: Storage, C: Clock>(app: App<W, S, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, W, S, C>(terminal: &mut Terminal<B>, mut app: App<W, S, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    W: WordSource,
    S: Storage,
    C: Clock,
{
    app.new_round();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll with a timeout so the timer keeps moving without input
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Drop the round so its ticker stops before the terminal is restored
    app.controller.abandon();
    Ok(())
}
