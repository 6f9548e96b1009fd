//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback};
use colored::{ColoredString, Colorize};

/// A colored peg for one code slot
#[must_use]
pub fn color_swatch(color: Color) -> ColoredString {
    let peg = "●";
    match color {
        Color::Red => peg.red(),
        Color::Blue => peg.blue(),
        Color::Green => peg.green(),
        Color::Yellow => peg.yellow(),
        Color::Orange => peg.truecolor(255, 165, 0),
        Color::Purple => peg.purple(),
    }
}

/// Format a code as colored pegs followed by its initials
#[must_use]
pub fn code_to_swatches(code: &Code) -> String {
    let pegs: Vec<String> = code
        .colors()
        .iter()
        .map(|&color| color_swatch(color).to_string())
        .collect();
    format!("{} ({})", pegs.join(" "), code_to_initials(code))
}

/// Format a code in compact uppercase initials, e.g. `RBGY`
#[must_use]
pub fn code_to_initials(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|color| color.initial().to_ascii_uppercase())
        .collect()
}

/// Format feedback as key pegs, exact matches highlighted
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback) -> String {
    let pegs = feedback.to_pegs();
    let exact = usize::from(feedback.exact_matches());
    let (hits, rest): (String, String) = (
        pegs.chars().take(exact).collect(),
        pegs.chars().skip(exact).collect(),
    );
    format!("{}{}", hits.bright_green().bold(), rest.bright_white())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_are_uppercase() {
        let code: Code = "rbgy".parse().unwrap();
        assert_eq!(code_to_initials(&code), "RBGY");
    }

    #[test]
    fn swatches_include_initials() {
        let code: Code = "oopp".parse().unwrap();
        assert!(code_to_swatches(&code).ends_with("(OOPP)"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
