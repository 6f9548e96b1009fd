//! Round state machine
//!
//! A [`GameSession`] runs one round at a time:
//!
//! ```text
//! NotStarted --start--> InProgress --guess--> InProgress | Won | Lost
//!      ^                                                     |
//!      +------------------------reset------------------------+
//! ```
//!
//! `start` is legal from any state and begins a fresh round, which is also
//! how "play again" works.

use super::error::GameError;
use super::registry::PlayerRegistry;
use crate::core::{Code, CodeGenerator, Feedback, GuessInput, score};
use std::fmt;
use tracing::{debug, info, warn};

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 3;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Check if the round has finished (won or lost)
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// A submitted guess with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    code: Code,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }

    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// One player's round against a hidden secret
///
/// The session owns its secret and history. Player scores live in a
/// [`PlayerRegistry`] passed into the operations that touch it, so the same
/// registry carries across any number of rounds and resets.
pub struct GameSession<G: CodeGenerator> {
    generator: G,
    secret: Option<Code>,
    history: Vec<GuessRecord>,
    remaining_attempts: usize,
    status: GameStatus,
    player: Option<String>,
    points_awarded: Option<u32>,
}

impl<G: CodeGenerator> GameSession<G> {
    /// Create an idle session that draws its secrets from `generator`
    pub const fn new(generator: G) -> Self {
        Self {
            generator,
            secret: None,
            history: Vec::new(),
            remaining_attempts: MAX_ATTEMPTS,
            status: GameStatus::NotStarted,
            player: None,
            points_awarded: None,
        }
    }

    /// Start a new round for `name`
    ///
    /// Registers the trimmed name (keeping any existing score), draws a new
    /// secret and clears the previous round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidInput`] if the name is empty after trimming;
    /// the session is left untouched.
    pub fn start(&mut self, registry: &mut PlayerRegistry, name: &str) -> Result<(), GameError> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Rejected round start with empty player name");
            return Err(GameError::InvalidInput);
        }

        registry.register(name);
        self.secret = Some(self.generator.generate());
        self.history.clear();
        self.remaining_attempts = MAX_ATTEMPTS;
        self.status = GameStatus::InProgress;
        self.player = Some(name.to_string());
        self.points_awarded = None;

        info!(player = name, "Round started");
        Ok(())
    }

    /// Start another round for the current player
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotStarted`] if no player has started a round
    /// since creation or the last reset.
    pub fn play_again(&mut self, registry: &mut PlayerRegistry) -> Result<(), GameError> {
        let player = self.player.clone().ok_or(GameError::NotStarted)?;
        self.start(registry, &player)
    }

    /// Submit a guess for the current round
    ///
    /// On a win the player earns [`score`] points for the number of guesses
    /// used, and the attempt counter is left as is. Otherwise one attempt is
    /// consumed and the round is lost when none remain.
    ///
    /// # Errors
    ///
    /// Checked in this order, each leaving all state unchanged:
    /// - [`GameError::NotStarted`] if no round is running
    /// - [`GameError::RoundAlreadyWon`] if the secret was already found
    /// - [`GameError::NoAttemptsLeft`] if the round was lost
    /// - [`GameError::IncompleteGuess`] if any slot is empty
    pub fn submit_guess(
        &mut self,
        registry: &mut PlayerRegistry,
        guess: impl Into<GuessInput>,
    ) -> Result<Feedback, GameError> {
        let guess = guess.into();

        let secret = match (self.status, self.secret) {
            (GameStatus::Won, _) => return Err(GameError::RoundAlreadyWon),
            (GameStatus::NotStarted, _) | (_, None) => return Err(GameError::NotStarted),
            (GameStatus::InProgress | GameStatus::Lost, Some(secret)) => secret,
        };

        if self.remaining_attempts == 0 {
            warn!("Rejected guess after the round was lost");
            return Err(GameError::NoAttemptsLeft);
        }

        let Some(code) = guess.complete() else {
            warn!("Rejected incomplete guess");
            return Err(GameError::IncompleteGuess);
        };

        let feedback = Feedback::evaluate(&secret, &code);
        self.history.push(GuessRecord { code, feedback });
        debug!(
            guess = %code,
            exact = feedback.exact_matches(),
            color = feedback.color_matches(),
            "Guess evaluated"
        );

        if feedback.is_win() {
            self.status = GameStatus::Won;
            let points = score(self.history.len());
            self.points_awarded = Some(points);
            if let Some(player) = &self.player {
                let total = registry.add_score(player, points);
                info!(
                    player = %player,
                    guesses = self.history.len(),
                    points,
                    total,
                    "Round won"
                );
            }
            return Ok(feedback);
        }

        self.remaining_attempts -= 1;
        if self.remaining_attempts == 0 {
            self.status = GameStatus::Lost;
            info!(player = ?self.player, secret = %secret, "Round lost");
        }

        Ok(feedback)
    }

    /// Abandon any round and return to [`GameStatus::NotStarted`]
    ///
    /// The registry is not touched; scores persist across resets.
    pub fn reset(&mut self) {
        self.secret = None;
        self.history.clear();
        self.remaining_attempts = MAX_ATTEMPTS;
        self.status = GameStatus::NotStarted;
        self.player = None;
        self.points_awarded = None;
        debug!("Session reset");
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.remaining_attempts
    }

    /// Guesses and feedback in submission order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    /// The player of the current (or just finished) round
    #[must_use]
    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    /// Points earned by the last win, until the next start or reset
    #[must_use]
    pub const fn points_awarded(&self) -> Option<u32> {
        self.points_awarded
    }

    /// Reveal the secret once the round is over
    ///
    /// Returns `None` while the round is running or before it starts.
    #[must_use]
    pub fn reveal_secret(&self) -> Option<Code> {
        if self.status.is_over() {
            self.secret
        } else {
            None
        }
    }
}

impl<G: CodeGenerator> fmt::Debug for GameSession<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("secret", &self.secret.map(|_| "<hidden>"))
            .field("history", &self.history)
            .field("remaining_attempts", &self.remaining_attempts)
            .field("status", &self.status)
            .field("player", &self.player)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, FixedCodeGenerator};

    const SECRET: &str = "rbgy";

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn started(secret: &str) -> (GameSession<FixedCodeGenerator>, PlayerRegistry) {
        let mut session = GameSession::new(FixedCodeGenerator::new(code(secret)));
        let mut registry = PlayerRegistry::new();
        session.start(&mut registry, "Ana").unwrap();
        (session, registry)
    }

    #[test]
    fn new_session_is_idle() {
        let session = GameSession::new(FixedCodeGenerator::new(code(SECRET)));
        assert_eq!(session.status(), GameStatus::NotStarted);
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS);
        assert!(session.history().is_empty());
        assert_eq!(session.player(), None);
    }

    #[test]
    fn start_rejects_blank_name() {
        let mut session = GameSession::new(FixedCodeGenerator::new(code(SECRET)));
        let mut registry = PlayerRegistry::new();

        assert_eq!(session.start(&mut registry, "  "), Err(GameError::InvalidInput));
        assert_eq!(session.start(&mut registry, ""), Err(GameError::InvalidInput));
        assert_eq!(session.status(), GameStatus::NotStarted);
        assert!(registry.is_empty());
    }

    #[test]
    fn start_registers_trimmed_player() {
        let mut session = GameSession::new(FixedCodeGenerator::new(code(SECRET)));
        let mut registry = PlayerRegistry::new();

        session.start(&mut registry, "  Ana ").unwrap();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.player(), Some("Ana"));
        assert_eq!(registry.score_of("Ana"), Some(0));
        assert_eq!(session.remaining_attempts(), 3);
    }

    #[test]
    fn incomplete_guess_consumes_nothing() {
        let (mut session, mut registry) = started(SECRET);
        let partial = GuessInput::new([Some(Color::Red), None, Some(Color::Blue), Some(Color::Green)]);

        assert_eq!(
            session.submit_guess(&mut registry, partial),
            Err(GameError::IncompleteGuess)
        );
        assert_eq!(session.remaining_attempts(), 3);
        assert!(session.history().is_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn swapped_guess_gives_two_and_two() {
        let (mut session, mut registry) = started(SECRET);
        let feedback = session.submit_guess(&mut registry, code("rgby")).unwrap();
        assert_eq!(feedback, Feedback::new(2, 2));
        assert_eq!(session.remaining_attempts(), 2);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].code(), code("rgby"));
        assert_eq!(session.history()[0].feedback(), feedback);
    }

    #[test]
    fn three_misses_lose_the_round() {
        let (mut session, mut registry) = started(SECRET);
        for guess in ["rgby", "oooo", "pppp"] {
            session.submit_guess(&mut registry, code(guess)).unwrap();
        }

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.remaining_attempts(), 0);
        assert_eq!(session.history().len(), 3);
        assert_eq!(registry.score_of("Ana"), Some(0));
        assert_eq!(session.points_awarded(), None);
    }

    #[test]
    fn guess_after_loss_is_rejected() {
        let (mut session, mut registry) = started(SECRET);
        for _ in 0..MAX_ATTEMPTS {
            session.submit_guess(&mut registry, code("oooo")).unwrap();
        }

        assert_eq!(
            session.submit_guess(&mut registry, code(SECRET)),
            Err(GameError::NoAttemptsLeft)
        );
        // Attempts are checked before completeness
        assert_eq!(
            session.submit_guess(&mut registry, GuessInput::empty()),
            Err(GameError::NoAttemptsLeft)
        );
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.status(), GameStatus::Lost);
    }

    #[test]
    fn first_guess_win_awards_ninety() {
        let (mut session, mut registry) = started(SECRET);
        let feedback = session.submit_guess(&mut registry, code(SECRET)).unwrap();

        assert!(feedback.is_win());
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.remaining_attempts(), 3);
        assert_eq!(session.points_awarded(), Some(90));
        assert_eq!(registry.score_of("Ana"), Some(90));
    }

    #[test]
    fn second_guess_win_awards_eighty() {
        let (mut session, mut registry) = started(SECRET);
        session.submit_guess(&mut registry, code("oooo")).unwrap();
        session.submit_guess(&mut registry, code(SECRET)).unwrap();

        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.remaining_attempts(), 2);
        assert_eq!(registry.score_of("Ana"), Some(80));
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let (mut session, mut registry) = started(SECRET);
        session.submit_guess(&mut registry, code("oooo")).unwrap();
        session.submit_guess(&mut registry, code("pppp")).unwrap();
        session.submit_guess(&mut registry, code(SECRET)).unwrap();

        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.remaining_attempts(), 1);
        assert_eq!(registry.score_of("Ana"), Some(70));
    }

    #[test]
    fn guess_after_win_is_rejected() {
        let (mut session, mut registry) = started(SECRET);
        session.submit_guess(&mut registry, code(SECRET)).unwrap();

        assert_eq!(
            session.submit_guess(&mut registry, code(SECRET)),
            Err(GameError::RoundAlreadyWon)
        );
        assert_eq!(session.history().len(), 1);
        assert_eq!(registry.score_of("Ana"), Some(90));
    }

    #[test]
    fn guess_before_start_is_rejected() {
        let mut session = GameSession::new(FixedCodeGenerator::new(code(SECRET)));
        let mut registry = PlayerRegistry::new();
        assert_eq!(
            session.submit_guess(&mut registry, code(SECRET)),
            Err(GameError::NotStarted)
        );
    }

    #[test]
    fn secret_hidden_until_round_ends() {
        let (mut session, mut registry) = started(SECRET);
        assert_eq!(session.reveal_secret(), None);

        let debug = format!("{session:?}");
        assert!(debug.contains("<hidden>"));
        assert!(!debug.contains("Yellow"));

        session.submit_guess(&mut registry, code("oooo")).unwrap();
        assert_eq!(session.reveal_secret(), None);

        session.submit_guess(&mut registry, code(SECRET)).unwrap();
        assert_eq!(session.reveal_secret(), Some(code(SECRET)));
    }

    #[test]
    fn secret_revealed_after_loss() {
        let (mut session, mut registry) = started(SECRET);
        for _ in 0..MAX_ATTEMPTS {
            session.submit_guess(&mut registry, code("pppp")).unwrap();
        }
        assert_eq!(session.reveal_secret(), Some(code(SECRET)));
    }

    #[test]
    fn reset_clears_round_but_keeps_scores() {
        let (mut session, mut registry) = started(SECRET);
        session.submit_guess(&mut registry, code(SECRET)).unwrap();

        session.reset();
        assert_eq!(session.status(), GameStatus::NotStarted);
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS);
        assert!(session.history().is_empty());
        assert_eq!(session.reveal_secret(), None);
        assert_eq!(session.player(), None);
        assert_eq!(registry.score_of("Ana"), Some(90));
    }

    #[test]
    fn restart_draws_fresh_secret() {
        let first = code("rrrr");
        let second = code("bbbb");
        let mut session = GameSession::new(FixedCodeGenerator::new(first).then(second));
        let mut registry = PlayerRegistry::new();

        session.start(&mut registry, "Ana").unwrap();
        session.submit_guess(&mut registry, first).unwrap();
        assert_eq!(session.status(), GameStatus::Won);

        session.play_again(&mut registry).unwrap();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(session.history().is_empty());
        assert_eq!(session.points_awarded(), None);

        let feedback = session.submit_guess(&mut registry, first).unwrap();
        assert_eq!(feedback, Feedback::new(0, 0));
        session.submit_guess(&mut registry, second).unwrap();
        assert_eq!(registry.score_of("Ana"), Some(90 + 80));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn play_again_needs_a_player() {
        let mut session = GameSession::new(FixedCodeGenerator::new(code(SECRET)));
        let mut registry = PlayerRegistry::new();
        assert_eq!(session.play_again(&mut registry), Err(GameError::NotStarted));
    }

    #[test]
    fn status_is_over_only_when_finished() {
        assert!(!GameStatus::NotStarted.is_over());
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }
}
