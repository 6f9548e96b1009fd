//! Mastermind peg colors
//!
//! The palette is fixed at six colors. Each color has a stable index (0-5)
//! used for per-color counting during feedback evaluation.

use super::code::CodeParseError;
use std::fmt;
use std::str::FromStr;

/// Number of colors in the palette
pub const PALETTE_SIZE: usize = 6;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
}

/// Every color, in index order
pub const PALETTE: [Color; PALETTE_SIZE] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Orange,
    Color::Purple,
];

impl Color {
    /// Position of this color in [`PALETTE`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase English name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Purple => "purple",
        }
    }

    /// Single-letter shorthand used by the compact code notation
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Orange => 'o',
            Self::Purple => 'p',
        }
    }

    /// Look up a color from its initial (case-insensitive)
    #[must_use]
    pub fn from_initial(ch: char) -> Option<Self> {
        PALETTE
            .into_iter()
            .find(|color| color.initial() == ch.to_ascii_lowercase())
    }

    /// The next color in palette order, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        PALETTE[(self.index() + 1) % PALETTE_SIZE]
    }

    /// The previous color in palette order, wrapping around
    #[must_use]
    pub const fn previous(self) -> Self {
        PALETTE[(self.index() + PALETTE_SIZE - 1) % PALETTE_SIZE]
    }

    /// Parse a color from its name, initial, or Portuguese label
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::parse("Red"), Some(Color::Red));
    /// assert_eq!(Color::parse("p"), Some(Color::Purple));
    /// assert_eq!(Color::parse("amarelo"), Some(Color::Yellow));
    /// assert_eq!(Color::parse("teal"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let mut chars = lower.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Self::from_initial(ch);
        }

        match lower.as_str() {
            "red" | "vermelho" => Some(Self::Red),
            "blue" | "azul" => Some(Self::Blue),
            "green" | "verde" => Some(Self::Green),
            "yellow" | "amarelo" => Some(Self::Yellow),
            "orange" | "laranja" => Some(Self::Orange),
            "purple" | "roxo" => Some(Self::Purple),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CodeParseError::UnknownColor(s.trim().to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_indices_match_positions() {
        for (i, color) in PALETTE.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn parse_accepts_names_initials_and_portuguese() {
        assert_eq!(Color::parse("green"), Some(Color::Green));
        assert_eq!(Color::parse("GREEN"), Some(Color::Green));
        assert_eq!(Color::parse(" verde "), Some(Color::Green));
        assert_eq!(Color::parse("O"), Some(Color::Orange));
        assert_eq!(Color::parse("roxo"), Some(Color::Purple));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Color::parse(""), None);
        assert_eq!(Color::parse("x"), None);
        assert_eq!(Color::parse("magenta"), None);
    }

    #[test]
    fn from_str_reports_the_bad_token() {
        let err = "teal".parse::<Color>().unwrap_err();
        assert_eq!(err, CodeParseError::UnknownColor("teal".to_string()));
    }

    #[test]
    fn cycling_wraps_around() {
        assert_eq!(Color::Purple.next(), Color::Red);
        assert_eq!(Color::Red.previous(), Color::Purple);
        assert_eq!(Color::Blue.next().previous(), Color::Blue);
    }

    #[test]
    fn initials_are_unique() {
        for color in PALETTE {
            assert_eq!(Color::from_initial(color.initial()), Some(color));
        }
    }

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(Color::Yellow.to_string(), "yellow");
    }
}
