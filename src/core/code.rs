//! Code sequences
//!
//! A [`Code`] is a fully specified row of four colors, used both for the
//! secret and for submitted guesses. A [`GuessInput`] is the row as the
//! player is still assembling it, where any slot may be empty.

use super::color::{Color, PALETTE, PALETTE_SIZE};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of slots in every code
pub const CODE_LENGTH: usize = 4;

/// Number of distinct codes (6^4)
pub const TOTAL_CODES: usize = PALETTE_SIZE.pow(CODE_LENGTH as u32);

/// Error type for text that does not describe a code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeParseError {
    #[error("unknown color '{0}' (expected red, blue, green, yellow, orange or purple)")]
    UnknownColor(String),
    #[error("a code has exactly 4 slots, got {0}")]
    WrongLength(usize),
    #[error("every slot needs a color")]
    Incomplete,
}

/// A complete row of four colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([Color; CODE_LENGTH]);

impl Code {
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// Get the color at a specific slot (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn color_at(&self, position: usize) -> Color {
        self.0[position]
    }

    /// Count how many times each palette color occurs, indexed by [`Color::index`]
    #[inline]
    pub(crate) fn color_counts(&self) -> [u8; PALETTE_SIZE] {
        let mut counts = [0u8; PALETTE_SIZE];
        for color in self.0 {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Iterate over all 1296 codes in lexicographic palette order
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, TOTAL_CODES};
    ///
    /// assert_eq!(Code::all().count(), TOTAL_CODES);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TOTAL_CODES).map(|mut n| {
            let mut colors = [Color::Red; CODE_LENGTH];
            for slot in colors.iter_mut().rev() {
                *slot = PALETTE[n % PALETTE_SIZE];
                n /= PALETTE_SIZE;
            }
            Self(colors)
        })
    }
}

impl FromStr for Code {
    type Err = CodeParseError;

    /// Parse a code written as names or initials, e.g. `"red blue green yellow"`,
    /// `"r,b,g,y"` or `"rbgy"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<GuessInput>()?
            .complete()
            .ok_or(CodeParseError::Incomplete)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

/// A guess row under construction; slots may still be empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessInput([Option<Color>; CODE_LENGTH]);

impl GuessInput {
    #[must_use]
    pub const fn new(slots: [Option<Color>; CODE_LENGTH]) -> Self {
        Self(slots)
    }

    /// A row with every slot empty
    #[must_use]
    pub const fn empty() -> Self {
        Self([None; CODE_LENGTH])
    }

    #[must_use]
    pub const fn slots(&self) -> &[Option<Color>; CODE_LENGTH] {
        &self.0
    }

    /// # Panics
    /// Panics if position >= 4
    #[must_use]
    pub const fn slot(&self, position: usize) -> Option<Color> {
        self.0[position]
    }

    /// # Panics
    /// Panics if position >= 4
    pub fn set(&mut self, position: usize, color: Option<Color>) {
        self.0[position] = color;
    }

    pub fn clear(&mut self) {
        self.0 = [None; CODE_LENGTH];
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Convert to a [`Code`] if every slot is filled
    #[must_use]
    pub fn complete(&self) -> Option<Code> {
        let mut colors = [Color::Red; CODE_LENGTH];
        for (dst, src) in colors.iter_mut().zip(self.0) {
            *dst = src?;
        }
        Some(Code(colors))
    }
}

impl From<Code> for GuessInput {
    fn from(code: Code) -> Self {
        Self(code.0.map(Some))
    }
}

/// Markers accepted for an empty slot
fn is_empty_marker(token: &str) -> bool {
    matches!(token, "" | "_" | "-")
}

impl FromStr for GuessInput {
    type Err = CodeParseError;

    /// Parse a possibly incomplete row
    ///
    /// Accepts comma-separated (`"red,,blue,green"`), whitespace-separated
    /// (`"red _ blue green"`) or compact initials (`"r_bg"`). Empty slots are
    /// written as an empty field, `_` or `-`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color, GuessInput};
    ///
    /// let input: GuessInput = "red,,blue,green".parse().unwrap();
    /// assert_eq!(input.slot(0), Some(Color::Red));
    /// assert_eq!(input.slot(1), None);
    /// assert!(!input.is_complete());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let is_compact = !s.contains(',')
            && !s.contains(char::is_whitespace)
            && s.chars().count() == CODE_LENGTH
            && s
                .chars()
                .all(|ch| matches!(ch, '_' | '-') || Color::from_initial(ch).is_some());

        if is_compact {
            let mut slots = [None; CODE_LENGTH];
            for (slot, ch) in slots.iter_mut().zip(s.chars()) {
                *slot = Color::from_initial(ch);
            }
            return Ok(Self(slots));
        }

        let tokens: Vec<&str> = if s.contains(',') {
            s.split(',').map(str::trim).collect()
        } else {
            s.split_whitespace().collect()
        };

        if tokens.len() != CODE_LENGTH {
            return Err(CodeParseError::WrongLength(tokens.len()));
        }

        let mut slots = [None; CODE_LENGTH];
        for (slot, token) in slots.iter_mut().zip(tokens) {
            if !is_empty_marker(token) {
                *slot = Some(token.parse()?);
            }
        }
        Ok(Self(slots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Green, Orange, Purple, Red, Yellow};

    #[test]
    fn code_parses_all_notations() {
        let expected = Code::new([Red, Blue, Green, Yellow]);
        assert_eq!("red blue green yellow".parse::<Code>().unwrap(), expected);
        assert_eq!("red, blue, green, yellow".parse::<Code>().unwrap(), expected);
        assert_eq!("r b g y".parse::<Code>().unwrap(), expected);
        assert_eq!("RBGY".parse::<Code>().unwrap(), expected);
        assert_eq!(
            "vermelho azul verde amarelo".parse::<Code>().unwrap(),
            expected
        );
    }

    #[test]
    fn code_parse_rejects_bad_input() {
        assert_eq!(
            "red blue".parse::<Code>(),
            Err(CodeParseError::WrongLength(2))
        );
        assert_eq!("blue".parse::<Code>(), Err(CodeParseError::WrongLength(1)));
        assert_eq!("".parse::<Code>(), Err(CodeParseError::WrongLength(0)));
        assert_eq!(
            "red blue teal green".parse::<Code>(),
            Err(CodeParseError::UnknownColor("teal".to_string()))
        );
        assert_eq!(
            "red,,blue,green".parse::<Code>(),
            Err(CodeParseError::Incomplete)
        );
    }

    #[test]
    fn guess_input_tracks_empty_slots() {
        let input: GuessInput = "red,,blue,green".parse().unwrap();
        assert_eq!(input.slots(), &[Some(Red), None, Some(Blue), Some(Green)]);
        assert!(!input.is_complete());
        assert_eq!(input.complete(), None);

        let compact: GuessInput = "r_bg".parse().unwrap();
        assert_eq!(compact, input);

        let spaced: GuessInput = "red - blue green".parse().unwrap();
        assert_eq!(spaced, input);
    }

    #[test]
    fn guess_input_set_and_clear() {
        let mut input = GuessInput::empty();
        for (i, color) in [Orange, Orange, Purple, Red].into_iter().enumerate() {
            input.set(i, Some(color));
        }
        assert_eq!(input.complete(), Some(Code::new([Orange, Orange, Purple, Red])));

        input.set(2, None);
        assert!(!input.is_complete());

        input.clear();
        assert_eq!(input, GuessInput::default());
    }

    #[test]
    fn guess_input_from_code_is_complete() {
        let code = Code::new([Yellow, Yellow, Yellow, Blue]);
        let input = GuessInput::from(code);
        assert!(input.is_complete());
        assert_eq!(input.complete(), Some(code));
    }

    #[test]
    fn color_counts_handle_repeats() {
        let code = Code::new([Red, Red, Green, Red]);
        let counts = code.color_counts();
        assert_eq!(counts[Red.index()], 3);
        assert_eq!(counts[Green.index()], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), CODE_LENGTH);
    }

    #[test]
    fn all_codes_are_distinct_and_ordered() {
        let codes: Vec<Code> = Code::all().collect();
        assert_eq!(codes.len(), TOTAL_CODES);
        assert_eq!(codes[0], Code::new([Red; CODE_LENGTH]));
        assert_eq!(codes[1], Code::new([Red, Red, Red, Blue]));
        assert_eq!(codes[TOTAL_CODES - 1], Code::new([Purple; CODE_LENGTH]));
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn display_joins_names() {
        let code = Code::new([Red, Blue, Green, Yellow]);
        assert_eq!(code.to_string(), "red blue green yellow");
    }
}
