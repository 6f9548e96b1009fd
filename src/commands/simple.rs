//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI. Reads commands and guesses from any
//! `BufRead` and writes to any `Write`, so it runs the same against a terminal
//! or a test buffer.

use crate::core::{CodeGenerator, GuessInput};
use crate::game::{GameError, GameSession, GameStatus, PlayerRegistry};
use crate::output::{write_guess_row, write_history, write_scoreboard};
use crate::output::formatters::code_to_swatches;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player asked for at a prompt
enum Flow {
    Continue,
    NewPlayer,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// Returns when the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<G: CodeGenerator>(
    session: &mut GameSession<G>,
    registry: &mut PlayerRegistry,
    mut input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Mastermind - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    print_help(&mut out)?;

    'players: loop {
        let Some(name) = get_user_input(&mut input, &mut out, "Enter your name")? else {
            return Ok(());
        };

        match name.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return say_goodbye(&mut out),
            "players" | "scores" => {
                write_scoreboard(&mut out, registry)?;
                continue;
            }
            _ => {}
        }

        if let Err(err) = session.start(registry, &name) {
            writeln!(out, "{}\n", format!("❌ {err}").red())?;
            continue;
        }
        announce_round(&mut out, session)?;

        loop {
            let prompt = format!("Guess ({} attempts left)", session.remaining_attempts());
            let Some(line) = get_user_input(&mut input, &mut out, &prompt)? else {
                return Ok(());
            };

            match handle_line(session, registry, &line, &mut out)? {
                Flow::Continue => {}
                Flow::NewPlayer => continue 'players,
                Flow::Quit => return say_goodbye(&mut out),
            }

            if !session.status().is_over() {
                continue;
            }

            report_round_end(&mut out, session, registry)?;

            let Some(answer) = get_user_input(&mut input, &mut out, "Play again? (yes/no)")? else {
                return Ok(());
            };
            match answer.to_lowercase().as_str() {
                "yes" | "y" => {
                    if let Err(err) = session.play_again(registry) {
                        writeln!(out, "{}\n", format!("❌ {err}").red())?;
                        continue 'players;
                    }
                    announce_round(&mut out, session)?;
                }
                "quit" | "q" | "exit" => return say_goodbye(&mut out),
                _ => {
                    session.reset();
                    writeln!(out, "\n🔄 Game reset. Who plays next?\n")?;
                    continue 'players;
                }
            }
        }
    }
}

/// Handle one line entered during a round: a command or a guess
fn handle_line<G: CodeGenerator>(
    session: &mut GameSession<G>,
    registry: &mut PlayerRegistry,
    line: &str,
    out: &mut impl Write,
) -> io::Result<Flow> {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Ok(Flow::Quit),
        "new" | "reset" | "n" => {
            session.reset();
            writeln!(out, "\n🔄 Game reset. Who plays next?\n")?;
            return Ok(Flow::NewPlayer);
        }
        "players" | "scores" => {
            write_scoreboard(out, registry)?;
            return Ok(Flow::Continue);
        }
        "history" | "h" => {
            write_history(out, session.history())?;
            return Ok(Flow::Continue);
        }
        "help" | "?" => {
            print_help(out)?;
            return Ok(Flow::Continue);
        }
        _ => {}
    }

    let guess: GuessInput = match line.parse() {
        Ok(guess) => guess,
        Err(err) => {
            writeln!(out, "{}\n", format!("❌ Invalid guess: {err}").red())?;
            return Ok(Flow::Continue);
        }
    };

    match session.submit_guess(registry, guess) {
        Ok(_) => {
            if let Some(record) = session.history().last() {
                write_guess_row(out, session.guesses_used(), record)?;
            }
        }
        Err(GameError::IncompleteGuess) => {
            writeln!(
                out,
                "{}\n",
                "❌ You must select a color for every position!".red()
            )?;
        }
        Err(err) => {
            writeln!(out, "{}\n", format!("❌ {err}").red())?;
        }
    }
    Ok(Flow::Continue)
}

fn announce_round<G: CodeGenerator>(out: &mut impl Write, session: &GameSession<G>) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "New round for {}! Crack the secret code in {} attempts.",
        session.player().unwrap_or_default().bright_white().bold(),
        session.remaining_attempts()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")
}

fn report_round_end<G: CodeGenerator>(
    out: &mut impl Write,
    session: &GameSession<G>,
    registry: &PlayerRegistry,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    match session.status() {
        GameStatus::Won => {
            writeln!(
                out,
                "{}",
                "    🎉 🎊 ✨  C O D E   C R A C K E D !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            )?;
            let guesses = session.guesses_used();
            writeln!(
                out,
                "\n  Solved in {} {} for {} points",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" },
                session.points_awarded().unwrap_or(0).to_string().bright_yellow().bold()
            )?;
        }
        GameStatus::Lost => {
            writeln!(out, "{}", "    💀  Game over! You've used all your attempts.".red().bold())?;
        }
        GameStatus::NotStarted | GameStatus::InProgress => {}
    }

    if let Some(secret) = session.reveal_secret() {
        writeln!(out, "\n  Secret code: {}", code_to_swatches(&secret))?;
    }
    writeln!(out, "\n  Guess history:")?;
    write_history(out, session.history())?;
    write_scoreboard(out, registry)?;
    writeln!(out, "{}\n", "═".repeat(70).bright_cyan())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Guess the 4-color secret. Colors: red, blue, green, yellow, orange, purple.")?;
    writeln!(out, "Enter a guess as names or initials:")?;
    writeln!(out, "  - red blue green yellow")?;
    writeln!(out, "  - r,b,g,y")?;
    writeln!(out, "  - rbgy")?;
    writeln!(out, "Feedback: ● right color & position, ○ right color wrong position, · miss\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new player, 'players' for scores, 'history', 'help'\n")
}

fn say_goodbye(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n👋 Thanks for playing!\n")
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
