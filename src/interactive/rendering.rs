//! TUI rendering with ratatui
//!
//! Board, keyboard and high-score panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterStatus, keyboard::ROWS};
use crate::output::formatters::{format_duration, ordinal};
use crate::round::Clock;
use crate::storage::Storage;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<W: WordSource, S: Storage, C: Clock>(f: &mut Frame, app: &App<W, S, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Keyboard, scores, messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile colors shared by the board and the keyboard
fn tile_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Exact => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        LetterStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn tile(letter: u8, status: LetterStatus) -> Span<'static> {
    Span::styled(
        format!(" {} ", char::from(letter.to_ascii_uppercase())),
        tile_style(status),
    )
}

fn render_header<W: WordSource, S: Storage, C: Clock>(
    f: &mut Frame,
    app: &App<W, S, C>,
    area: Rect,
) {
    let timer = format_duration(app.controller.elapsed_seconds());
    let title = format!(
        "WORDLE | {} ({} letters) | {timer}",
        app.difficulty.name(),
        app.target_length()
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<W: WordSource, S: Storage, C: Clock>(
    f: &mut Frame,
    app: &App<W, S, C>,
    area: Rect,
) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(round) = app.round() {
        for (i, record) in round.history().iter().enumerate() {
            let mut spans = vec![Span::styled(
                format!("{:>2}  ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(
                record
                    .guess
                    .chars()
                    .iter()
                    .zip(record.feedback.marks())
                    .map(|(&letter, &mark)| tile(letter, mark.into())),
            );
            lines.push(Line::from(spans));
        }

        if app.input_mode == InputMode::Guessing {
            let typed = app.input_buffer.as_bytes();
            let mut spans = vec![Span::raw("    ")];
            spans.extend((0..round.target().len()).map(|i| match typed.get(i) {
                Some(&letter) => tile(letter, LetterStatus::Unknown),
                None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
            }));
            lines.push(Line::from(spans));
        } else if !round.is_finished() {
            lines.push(Line::from("Round over"));
        }
    } else {
        lines.push(Line::from("No round in progress"));
    }

    // Keep the newest rows visible
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<W: WordSource, S: Storage, C: Clock>(
    f: &mut Frame,
    app: &App<W, S, C>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(7), // High scores
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_high_scores(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard<W: WordSource, S: Storage, C: Clock>(
    f: &mut Frame,
    app: &App<W, S, C>,
    area: Rect,
) {
    let lines: Vec<Line> = ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let mut spans = vec![Span::raw(" ".repeat(indent * 2))];
            spans.extend(row.bytes().map(|letter| {
                let status = app
                    .round()
                    .map_or(LetterStatus::Unknown, |round| round.keyboard().status(letter));
                tile(letter, status)
            }));
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_high_scores<W: WordSource, S: Storage, C: Clock>(
    f: &mut Frame,
    app: &App<W, S, C>,
    area: Rect,
) {
    let records = app.controller.high_scores().top(app.difficulty);

    let items: Vec<ListItem> = if records.is_empty() {
        vec![ListItem::new("No scores yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                ListItem::new(format!(
                    "{:<4} {:>5}  {} guesses  {:>5}  {}",
                    ordinal(i + 1),
                    record.score,
                    record.guesses,
                    format_duration(record.elapsed_secs),
                    record.date.format("%Y-%m-%d")
                ))
            })
            .collect()
    };

    let title = format!(" High Scores ({}) ", app.difficulty.name());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(list, area);
}

fn render_messages<W: WordSource, S: Storage, C: Clock>(
    f: &mut Frame,
    app: &App<W, S, C>,
    area: Rect,
) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<W: WordSource, S: Storage, C: Clock>(
    f: &mut Frame,
    app: &App<W, S, C>,
    area: Rect,
) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Your Guess | Enter to submit, Tab to give up ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " Round Over | 'n' new round, 1/2/3 tier, 'q' quit ",
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<W: WordSource, S: Storage, C: Clock>(
    f: &mut Frame,
    app: &App<W, S, C>,
    area: Rect,
) {
    let guesses = app.round().map_or(0, |round| round.history().len());
    let help_text = format!(
        "Guesses: {guesses} | 1: Easy  2: Medium  3: Hard | Esc/Ctrl-C: Quit"
    );

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
