//! Automatic code breaker
//!
//! Keeps every code that is still consistent with the feedback seen so far
//! and guesses one of them.

use crate::core::{Code, Color, Feedback};
use crate::game::GuessRecord;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Opening guess: two pairs of colors split the candidate space well
pub const OPENING_GUESS: Code = Code::new([Color::Red, Color::Red, Color::Blue, Color::Blue]);

/// Consistent-candidate solver
///
/// A candidate is consistent when, for every past guess, evaluating that
/// guess against the candidate reproduces the recorded feedback.
pub struct Solver {
    all_codes: Vec<Code>,
}

impl Solver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            all_codes: Code::all().collect(),
        }
    }

    /// Get the next guess given previous guesses and feedback
    ///
    /// Returns [`OPENING_GUESS`] on an empty history, otherwise a random
    /// consistent candidate, or `None` if the history is contradictory.
    pub fn next_guess<R: Rng + ?Sized>(&self, history: &[GuessRecord], rng: &mut R) -> Option<Code> {
        if history.is_empty() {
            return Some(OPENING_GUESS);
        }

        let candidates = self.filter_candidates(history);

        // If only one candidate remains, just guess it
        if candidates.len() == 1 {
            return Some(candidates[0]);
        }

        candidates.choose(rng).copied()
    }

    /// Codes that would produce the observed feedback for every guess
    fn filter_candidates(&self, history: &[GuessRecord]) -> Vec<Code> {
        self.all_codes
            .iter()
            .filter(|&candidate| {
                history.iter().all(|record| {
                    Feedback::evaluate(candidate, &record.code()) == record.feedback()
                })
            })
            .copied()
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[GuessRecord]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates (public accessor)
    #[must_use]
    pub fn get_candidates(&self, history: &[GuessRecord]) -> Vec<Code> {
        self.filter_candidates(history)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
