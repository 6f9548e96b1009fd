//! Recoverable game errors
//!
//! None of these are fatal: the caller shows the message and lets the player
//! correct the input and try again.

use thiserror::Error;

/// Error type for rejected game actions
///
/// A rejected action never changes session or registry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Player name was empty or whitespace only
    #[error("name cannot be empty or just spaces")]
    InvalidInput,
    /// At least one guess slot had no color
    #[error("select a color for every position before submitting")]
    IncompleteGuess,
    /// The round was lost; all attempts are used up
    #[error("no attempts left, the round is over")]
    NoAttemptsLeft,
    /// No round has been started since creation or the last reset
    #[error("no round in progress, start a new game first")]
    NotStarted,
    /// The secret was already found this round
    #[error("the round is already won, start a new game to play again")]
    RoundAlreadyWon,
}
