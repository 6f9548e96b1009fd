//! Guess feedback calculation
//!
//! Feedback is a pair of counts:
//! - exact matches: right color in the right slot
//! - color matches: right color in the wrong slot
//!
//! Every secret slot and guess slot is consumed at most once across both
//! counts, so `exact + color <= 4` always holds.

use super::code::{CODE_LENGTH, Code};
use std::fmt;

/// Feedback for one guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact_matches: u8,
    color_matches: u8,
}

impl Feedback {
    /// All four slots exact (winning guess)
    pub const PERFECT: Self = Self {
        exact_matches: CODE_LENGTH as u8,
        color_matches: 0,
    };

    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if the counts add up to more than 4
    #[inline]
    #[must_use]
    pub const fn new(exact_matches: u8, color_matches: u8) -> Self {
        debug_assert!(
            (exact_matches + color_matches) as usize <= CODE_LENGTH,
            "Feedback counts must not exceed the code length"
        );
        Self {
            exact_matches,
            color_matches,
        }
    }

    #[inline]
    #[must_use]
    pub const fn exact_matches(self) -> u8 {
        self.exact_matches
    }

    #[inline]
    #[must_use]
    pub const fn color_matches(self) -> u8 {
        self.color_matches
    }

    /// Slots that matched neither exactly nor by color
    #[inline]
    #[must_use]
    pub const fn misses(self) -> u8 {
        CODE_LENGTH as u8 - self.exact_matches - self.color_matches
    }

    /// Check if the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact_matches as usize == CODE_LENGTH
    }

    /// Evaluate `guess` against `secret`
    ///
    /// Classic Mastermind scoring with single-use consumption of slots.
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches and remove them from the secret's color pool
    /// 2. Second pass: for each remaining guess slot, take one matching color from the pool
    ///
    /// Only local counters are touched; neither input is modified.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let secret: Code = "red blue green yellow".parse().unwrap();
    /// let guess: Code = "red green blue yellow".parse().unwrap();
    ///
    /// let feedback = Feedback::evaluate(&secret, &guess);
    /// assert_eq!(feedback.exact_matches(), 2);
    /// assert_eq!(feedback.color_matches(), 2);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Code, guess: &Code) -> Self {
        let mut exact = [false; CODE_LENGTH];
        let mut secret_available = secret.color_counts();
        let mut exact_matches = 0u8;
        let mut color_matches = 0u8;

        // First pass: exact position matches
        // Allow: Index needed to compare guess[i] with secret[i] and set exact[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..CODE_LENGTH {
            let color = guess.color_at(i);
            if color == secret.color_at(i) {
                exact[i] = true;
                exact_matches += 1;
                secret_available[color.index()] -= 1;
            }
        }

        // Second pass: right color, wrong position, from what is left
        for (i, color) in guess.colors().iter().enumerate() {
            if exact[i] {
                continue;
            }
            let available = &mut secret_available[color.index()];
            if *available > 0 {
                *available -= 1;
                color_matches += 1;
            }
        }

        Self {
            exact_matches,
            color_matches,
        }
    }

    /// Render as key pegs: `●` exact, `○` color, `·` miss
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Feedback;
    ///
    /// assert_eq!(Feedback::new(2, 1).to_pegs(), "●●○·");
    /// ```
    #[must_use]
    pub fn to_pegs(self) -> String {
        let mut result = String::with_capacity(CODE_LENGTH * 3);
        result.extend(std::iter::repeat_n('●', usize::from(self.exact_matches)));
        result.extend(std::iter::repeat_n('○', usize::from(self.color_matches)));
        result.extend(std::iter::repeat_n('·', usize::from(self.misses())));
        result
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} correct position, {} correct color",
            self.exact_matches, self.color_matches
        )
    }
}
