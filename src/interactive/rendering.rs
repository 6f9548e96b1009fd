//! TUI rendering with ratatui
//!
//! Board, scoreboard and message panels for the Mastermind game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CODE_LENGTH, CodeGenerator, Color, Feedback, GuessInput, PALETTE, TOTAL_CODES};
use crate::game::{GameStatus, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const PEG: &str = "●";
const EMPTY_PEG: &str = "○";

/// Main UI rendering function
pub fn ui<G: CodeGenerator>(f: &mut Frame, app: &App<G>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Players and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

const fn term_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::Blue => TermColor::Blue,
        Color::Green => TermColor::Green,
        Color::Yellow => TermColor::Yellow,
        Color::Orange => TermColor::Rgb(255, 165, 0),
        Color::Purple => TermColor::Magenta,
    }
}

fn peg_span(color: Color) -> Span<'static> {
    Span::styled(PEG, Style::default().fg(term_color(color)))
}

fn feedback_spans(feedback: Feedback) -> Vec<Span<'static>> {
    let exact = usize::from(feedback.exact_matches());
    let partial = usize::from(feedback.color_matches());
    vec![
        Span::styled(
            "●".repeat(exact),
            Style::default()
                .fg(TermColor::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("○".repeat(partial), Style::default().fg(TermColor::White)),
        Span::styled(
            "·".repeat(usize::from(feedback.misses())),
            Style::default().fg(TermColor::DarkGray),
        ),
    ]
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Crack the Code")
        .style(
            Style::default()
                .fg(TermColor::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(TermColor::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<G: CodeGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Current guess
            Constraint::Min(5),    // History
            Constraint::Length(3), // Search space
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
    render_search_progress(f, app, chunks[2]);
}

fn guess_line(guess: &GuessInput, cursor: Option<usize>) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (position, slot) in guess.slots().iter().enumerate() {
        let selected = cursor == Some(position);
        let mut span = match slot {
            Some(color) => peg_span(*color),
            None => Span::styled(EMPTY_PEG, Style::default().fg(TermColor::DarkGray)),
        };
        if selected {
            span = span.patch_style(Style::default().add_modifier(Modifier::REVERSED));
        }
        spans.push(Span::raw(if selected { "[" } else { " " }));
        spans.push(span);
        spans.push(Span::raw(if selected { "]" } else { " " }));
    }
    Line::from(spans)
}

fn render_current_guess<G: CodeGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let mut content = Vec::new();

    match app.input_mode {
        InputMode::NameEntry => {
            content.push(Line::from("Waiting for a player..."));
        }
        InputMode::Guessing => {
            content.push(guess_line(&app.guess, Some(app.cursor)));
            let selected = app
                .guess
                .slot(app.cursor)
                .map_or_else(|| "empty".to_string(), |color| color.to_string());
            content.push(Line::from(format!(
                "  Slot {} of {CODE_LENGTH}: {selected}",
                app.cursor + 1
            )));
        }
        InputMode::RoundOver => {
            if let Some(secret) = app.session.reveal_secret() {
                let mut spans = vec![Span::raw("  Secret: ")];
                for &color in secret.colors() {
                    spans.push(peg_span(color));
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::raw(format!("({secret})")));
                content.push(Line::from(spans));
            }
        }
    }

    let mut palette = vec![Span::raw("  Palette: ")];
    for (i, &color) in PALETTE.iter().enumerate() {
        palette.push(Span::styled(
            format!("{}:", i + 1),
            Style::default().fg(TermColor::DarkGray),
        ));
        palette.push(peg_span(color));
        palette.push(Span::raw(format!("{} ", color.initial())));
    }
    content.push(Line::from(palette));

    content.push(Line::from(format!(
        "  Attempts left: {}/{MAX_ATTEMPTS}",
        app.session.remaining_attempts()
    )));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Current Guess ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_history<G: CodeGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let history_items: Vec<ListItem> = app
        .session
        .history()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            for &color in record.code().colors() {
                spans.push(peg_span(color));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::raw("  "));
            spans.extend(feedback_spans(record.feedback()));
            spans.push(Span::styled(
                format!("  {}", record.feedback()),
                Style::default().fg(TermColor::DarkGray),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_search_progress<G: CodeGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let candidates = app.get_candidates_count();
    let eliminated = TOTAL_CODES.saturating_sub(candidates);
    let progress_pct = (eliminated * 100 / TOTAL_CODES) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Codes Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(TermColor::Cyan))
        .percent(progress_pct)
        .label(format!("{candidates} of {TOTAL_CODES} codes still possible"));

    f.render_widget(gauge, area);
}

fn render_info_panel<G: CodeGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Players
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_players(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_players<G: CodeGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let current = app.session.player();
    let items: Vec<ListItem> = if app.registry.is_empty() {
        vec![ListItem::new("No players registered yet.").style(Style::default().fg(TermColor::DarkGray))]
    } else {
        app.registry
            .all_players()
            .iter()
            .map(|record| {
                let style = if current == Some(record.name()) {
                    Style::default()
                        .fg(TermColor::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(TermColor::White)
                };
                ListItem::new(format!("{} - {} points", record.name(), record.score())).style(style)
            })
            .collect()
    };

    let players = List::new(items).block(
        Block::default()
            .title(" Player History ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(players, area);
}

fn render_messages<G: CodeGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(TermColor::White),
                MessageStyle::Success => Style::default().fg(TermColor::Green),
                MessageStyle::Error => Style::default().fg(TermColor::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<G: CodeGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::NameEntry => (
            " Enter Your Name | Enter to start, ESC to quit ",
            app.name_buffer.clone(),
            TermColor::Cyan,
        ),
        InputMode::Guessing => (
            " Pick Colors (r b g y o p or 1-6, ↑/↓ cycle, ←/→ move) | Enter to submit ",
            app.guess
                .slots()
                .iter()
                .map(|slot| slot.map_or('_', |color| color.initial().to_ascii_uppercase()))
                .collect::<String>(),
            TermColor::Yellow,
        ),
        InputMode::RoundOver => {
            let (title, color) = if app.session.status() == GameStatus::Won {
                (" 🎉 CODE CRACKED! 🎉 | Enter to play again, 'n' for new player ", TermColor::Green)
            } else {
                (" 💀 GAME OVER | Enter to play again, 'n' for new player ", TermColor::Red)
            };
            (title, String::new(), color)
        }
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

fn render_status<G: CodeGenerator>(f: &mut Frame, app: &App<G>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let player_text = format!("Player: {}", app.session.player().unwrap_or("-"));
    let player = Paragraph::new(player_text).alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let status = Paragraph::new(format!("Status: {}", app.session.status())).alignment(Alignment::Center);
    f.render_widget(status, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::NameEntry => "ESC: Quit | Enter: Start",
        InputMode::Guessing => "q: Quit | ESC: Reset | ⌫: Clear slot",
        InputMode::RoundOver => "q: Quit | Enter: Again | n: New player",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TermColor::DarkGray));
    f.render_widget(help, chunks[3]);
}
