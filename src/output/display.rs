//! Display functions for command results and game state

use super::formatters::{code_to_swatches, create_progress_bar, feedback_to_pegs};
use crate::commands::{CheckResult, SimulationResult, max_points_per_round};
use crate::game::{GuessRecord, MAX_ATTEMPTS, PlayerRegistry};
use colored::Colorize;
use std::io::{self, Write};

/// Write one history row: number, guess pegs, feedback
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_guess_row(out: &mut impl Write, number: usize, record: &GuessRecord) -> io::Result<()> {
    writeln!(
        out,
        "  {}. {}  {}  {}",
        number.to_string().bright_black(),
        code_to_swatches(&record.code()),
        feedback_to_pegs(record.feedback()),
        record.feedback().to_string().bright_black()
    )
}

/// Write every history row in submission order
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_history(out: &mut impl Write, history: &[GuessRecord]) -> io::Result<()> {
    for (i, record) in history.iter().enumerate() {
        write_guess_row(out, i + 1, record)?;
    }
    Ok(())
}

/// Write the player list with cumulative scores
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_scoreboard(out: &mut impl Write, registry: &PlayerRegistry) -> io::Result<()> {
    writeln!(out, "\n{}", "Player history".bright_cyan().bold())?;
    if registry.is_empty() {
        writeln!(out, "  No players registered yet.")?;
        return Ok(());
    }
    for record in registry.all_players() {
        writeln!(
            out,
            "  {} - {} points",
            record.name().bright_white().bold(),
            record.score().to_string().bright_yellow()
        )?;
    }
    Ok(())
}

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Secret:   {}", code_to_swatches(&result.secret));
    println!("Guess:    {}", code_to_swatches(&result.guess));
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Feedback: {}  {}",
        feedback_to_pegs(result.feedback),
        result.feedback
    );

    if result.feedback.is_win() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Player:           {}", result.player);
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Wins:             {}",
        format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0)
            .green()
            .bold()
    );
    println!("   Losses:           {}", result.losses.to_string().yellow());
    println!(
        "   Total points:     {}",
        result.total_points.to_string().bright_yellow().bold()
    );
    println!(
        "   Points / round:   [{}] {:.1}",
        create_progress_bar(
            result.average_points,
            f64::from(max_points_per_round()),
            20
        )
        .green(),
        result.average_points
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Wins by guesses used:".bright_cyan().bold());
    for guess_count in 1..=MAX_ATTEMPTS {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = if result.rounds > 0 {
            (count as f64 / result.rounds as f64) * 100.0
        } else {
            0.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, FixedCodeGenerator};
    use crate::game::GameSession;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn scoreboard_lists_players_in_order() {
        let mut registry = PlayerRegistry::new();
        registry.register("Ana");
        registry.register("Rui");
        registry.add_score("Rui", 70);

        let text = render(|out| write_scoreboard(out, &registry));
        let ana = text.find("Ana").unwrap();
        let rui = text.find("Rui").unwrap();
        assert!(ana < rui);
        assert!(text.contains("70"));
    }

    #[test]
    fn scoreboard_empty_message() {
        let registry = PlayerRegistry::new();
        let text = render(|out| write_scoreboard(out, &registry));
        assert!(text.contains("No players registered yet."));
    }

    #[test]
    fn history_has_one_line_per_guess() {
        let secret: Code = "rbgy".parse().unwrap();
        let mut session = GameSession::new(FixedCodeGenerator::new(secret));
        let mut registry = PlayerRegistry::new();
        session.start(&mut registry, "Ana").unwrap();
        for guess in ["rgby", "oooo"] {
            session
                .submit_guess(&mut registry, guess.parse::<Code>().unwrap())
                .unwrap();
        }

        let text = render(|out| write_history(out, session.history()));
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("RGBY"));
        assert!(text.contains("OOOO"));
    }
}
