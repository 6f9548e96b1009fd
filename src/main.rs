//! Mastermind - CLI
//!
//! Code-breaking game with TUI and CLI modes, a feedback checker and a
//! solver-driven simulation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{SimulationConfig, check_codes, run_simple, run_simulation},
    core::RandomCodeGenerator,
    game::{GameSession, PlayerRegistry},
    output::{print_check_result, print_simulation_result},
};
use std::io;
use tracing_subscriber::EnvFilter;

const TUI_LOG_FILE: &str = "mastermind.log";

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind: crack the 4-color secret code in 3 attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for secret generation (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the feedback a guess would get against a secret
    Check {
        /// Secret code, e.g. "rbgy" or "red,blue,green,yellow"
        secret: String,

        /// Guess to score against the secret
        guess: String,
    },

    /// Let the solver play many rounds and report its score
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Name the solver plays under
        #[arg(short, long, default_value = "solver")]
        player: String,
    },
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to a file while the TUI owns the terminal, otherwise to stderr
fn init_logging(to_file: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    if to_file {
        let log_file = std::fs::File::create(TUI_LOG_FILE)
            .with_context(|| format!("failed to create {TUI_LOG_FILE}"))?;
        builder
            .with_ansi(false)
            .with_writer(std::sync::Arc::new(log_file))
            .init();
    } else {
        builder.with_writer(io::stderr).init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(cli.seed),
        Commands::Simple => run_simple_command(cli.seed),
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
        Commands::Simulate { rounds, player } => {
            run_simulate_command(rounds, player, cli.seed);
            Ok(())
        }
    }
}

fn run_play_command(seed: Option<u64>) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(RandomCodeGenerator::from_seed_option(seed));
    run_tui(app)
}

fn run_simple_command(seed: Option<u64>) -> Result<()> {
    let mut session = GameSession::new(RandomCodeGenerator::from_seed_option(seed));
    let mut registry = PlayerRegistry::new();
    let stdin = io::stdin();

    run_simple(&mut session, &mut registry, stdin.lock(), io::stdout())
        .context("simple mode failed")
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_codes(secret, guess)?;
    print_check_result(&result);
    Ok(())
}

fn run_simulate_command(rounds: usize, player: String, seed: Option<u64>) {
    println!("Simulating {rounds} rounds as '{player}'...");

    let config = SimulationConfig {
        rounds,
        seed,
        player,
        show_progress: true,
    };
    let result = run_simulation(&config);
    print_simulation_result(&result);
}
