//! TUI application state and logic

use crate::core::{CODE_LENGTH, CodeGenerator, Color, GuessInput, PALETTE};
use crate::game::{GameSession, GameStatus, MAX_ATTEMPTS, PlayerRegistry};
use crate::solver::Solver;
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
use tracing::info;

/// Application state
pub struct App<G: CodeGenerator> {
    pub session: GameSession<G>,
    pub registry: PlayerRegistry,
    pub solver: Solver,
    pub input_mode: InputMode,
    pub name_buffer: String,
    pub guess: GuessInput,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    NameEntry,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by guesses used (index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl<G: CodeGenerator> App<G> {
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self {
            session: GameSession::new(generator),
            registry: PlayerRegistry::new(),
            solver: Solver::new(),
            input_mode: InputMode::NameEntry,
            name_buffer: String::new(),
            guess: GuessInput::empty(),
            cursor: 0,
            messages: vec![
                Message {
                    text: "Welcome to Mastermind! Crack the 4-color code in 3 attempts.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type your name and press Enter to start.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Codes still consistent with every clue this round
    #[must_use]
    pub fn get_candidates_count(&self) -> usize {
        self.solver.count_candidates(self.session.history())
    }

    /// Start a round for the name typed so far
    pub fn start_game(&mut self) {
        let name = self.name_buffer.clone();
        match self.session.start(&mut self.registry, &name) {
            Ok(()) => {
                self.name_buffer.clear();
                self.guess.clear();
                self.cursor = 0;
                self.input_mode = InputMode::Guessing;
                let player = self.session.player().unwrap_or_default().to_string();
                self.add_message(
                    &format!("Good luck, {player}! Pick a color for each slot."),
                    MessageStyle::Info,
                );
            }
            Err(err) => self.add_message(&capitalize(&err.to_string()), MessageStyle::Error),
        }
    }

    /// Put a color in the selected slot and move to the next one
    pub fn set_color(&mut self, color: Color) {
        self.guess.set(self.cursor, Some(color));
        if self.cursor + 1 < CODE_LENGTH {
            self.cursor += 1;
        }
    }

    pub fn clear_slot(&mut self) {
        self.guess.set(self.cursor, None);
    }

    /// Step the selected slot through the palette
    pub fn cycle_color(&mut self, forward: bool) {
        let next = match (self.guess.slot(self.cursor), forward) {
            (None, true) => PALETTE[0],
            (None, false) => PALETTE[PALETTE.len() - 1],
            (Some(color), true) => color.next(),
            (Some(color), false) => color.previous(),
        };
        self.guess.set(self.cursor, Some(next));
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(CODE_LENGTH - 1);
    }

    /// Submit the row being edited
    pub fn submit_guess(&mut self) {
        match self.session.submit_guess(&mut self.registry, self.guess) {
            Ok(feedback) => {
                self.guess.clear();
                self.cursor = 0;

                match self.session.status() {
                    GameStatus::Won => {
                        let guesses = self.session.guesses_used();
                        self.stats.total_games += 1;
                        self.stats.games_won += 1;
                        if guesses <= MAX_ATTEMPTS {
                            self.stats.guess_distribution[guesses] += 1;
                        }
                        self.input_mode = InputMode::RoundOver;

                        let celebration = match guesses {
                            1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            _ => "😅 PHEW! Cracked on the last attempt! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message(
                            &format!(
                                "+{} points. Press Enter to play again, 'n' for a new player.",
                                self.session.points_awarded().unwrap_or(0)
                            ),
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::Lost => {
                        self.stats.total_games += 1;
                        self.input_mode = InputMode::RoundOver;
                        self.add_message(
                            "Game over! You've used all your attempts.",
                            MessageStyle::Error,
                        );
                        if let Some(secret) = self.session.reveal_secret() {
                            self.add_message(
                                &format!("The secret was: {secret}"),
                                MessageStyle::Info,
                            );
                        }
                    }
                    GameStatus::InProgress | GameStatus::NotStarted => {
                        self.add_message(
                            &format!(
                                "{feedback}. {} attempts left.",
                                self.session.remaining_attempts()
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(err) => self.add_message(&capitalize(&err.to_string()), MessageStyle::Error),
        }
    }

    /// Same player, fresh secret
    pub fn play_again(&mut self) {
        match self.session.play_again(&mut self.registry) {
            Ok(()) => {
                self.guess.clear();
                self.cursor = 0;
                self.input_mode = InputMode::Guessing;
                self.add_message("New round! A new secret has been drawn.", MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&capitalize(&err.to_string()), MessageStyle::Error);
                self.new_player();
            }
        }
    }

    /// Reset the round and go back to name entry; scores are kept
    pub fn new_player(&mut self) {
        self.session.reset();
        self.guess.clear();
        self.cursor = 0;
        self.name_buffer.clear();
        self.input_mode = InputMode::NameEntry;
        self.add_message("Game reset. Enter a name to start.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::NameEntry => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.name_buffer.push(c),
                KeyCode::Backspace => {
                    self.name_buffer.pop();
                }
                KeyCode::Enter => self.start_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.new_player(),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Left => self.move_cursor_left(),
                KeyCode::Right => self.move_cursor_right(),
                KeyCode::Up => self.cycle_color(true),
                KeyCode::Down => self.cycle_color(false),
                KeyCode::Backspace | KeyCode::Delete => self.clear_slot(),
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Char(c @ '1'..='6') => {
                    let index = c as usize - '1' as usize;
                    self.set_color(PALETTE[index]);
                }
                KeyCode::Char(c) => {
                    if let Some(color) = Color::from_initial(c) {
                        self.set_color(color);
                    }
                }
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('a') => self.play_again(),
                KeyCode::Char('n') | KeyCode::Esc => self.new_player(),
                _ => {}
            },
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<G: CodeGenerator>(app: App<G>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, G: CodeGenerator>(
    terminal: &mut Terminal<B>,
    mut app: App<G>,
) -> Result<()> {
    info!("TUI started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        games = app.stats.total_games,
        won = app.stats.games_won,
        "TUI closed"
    );
    Ok(())
}
