//! Simulation command
//!
//! Plays many rounds with the automatic solver and reports how often it wins
//! within the attempt budget and how many points that earns.

use crate::core::{CodeGenerator, RandomCodeGenerator, score};
use crate::game::{GameSession, GameStatus, PlayerRegistry};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub rounds: usize,
    pub seed: Option<u64>,
    pub player: String,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds,
            seed: None,
            player: "solver".to_string(),
            show_progress: false,
        }
    }
}

/// Result of a simulation run
pub struct SimulationResult {
    pub player: String,
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    /// Wins keyed by the number of guesses they took
    pub distribution: FxHashMap<usize, usize>,
    pub total_points: u32,
    pub average_points: f64,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Outcome of a single simulated round
struct RoundOutcome {
    won: bool,
    guesses: usize,
    points: u32,
}

/// Play one round with its own session, registry and RNGs
fn play_round<G: CodeGenerator>(
    solver: &Solver,
    generator: G,
    rng: &mut StdRng,
    player: &str,
) -> RoundOutcome {
    let mut session = GameSession::new(generator);
    let mut registry = PlayerRegistry::new();

    if let Err(err) = session.start(&mut registry, player) {
        warn!(%err, "Simulated round could not start");
        return RoundOutcome {
            won: false,
            guesses: 0,
            points: 0,
        };
    }

    while session.status() == GameStatus::InProgress {
        let Some(guess) = solver.next_guess(session.history(), rng) else {
            break;
        };
        if session.submit_guess(&mut registry, guess).is_err() {
            break;
        }
    }

    RoundOutcome {
        won: session.status() == GameStatus::Won,
        guesses: session.guesses_used(),
        points: registry.score_of(player).unwrap_or(0),
    }
}

/// Run `config.rounds` independent rounds in parallel
///
/// Round `i` uses secret seed `seed + i`, so a fixed seed reproduces the
/// whole run regardless of thread scheduling.
pub fn run_simulation(config: &SimulationConfig) -> SimulationResult {
    let start = Instant::now();
    let base_seed = config.seed.unwrap_or_else(rand::random);
    let solver = Solver::new();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.rounds as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    info!(rounds = config.rounds, seed = base_seed, "Starting simulation");

    let outcomes: Vec<RoundOutcome> = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let round_seed = base_seed.wrapping_add(i as u64);
            let generator = RandomCodeGenerator::seeded(round_seed);
            let mut rng = StdRng::seed_from_u64(round_seed.rotate_left(32));
            let outcome = play_round(&solver, generator, &mut rng, &config.player);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_points = 0u32;
    for outcome in outcomes.iter().filter(|o| o.won) {
        *distribution.entry(outcome.guesses).or_insert(0) += 1;
        total_points = total_points.saturating_add(outcome.points);
    }

    let rounds = outcomes.len();
    let wins = outcomes.iter().filter(|o| o.won).count();
    let duration = start.elapsed();

    let (win_rate, average_points) = if rounds > 0 {
        (
            wins as f64 / rounds as f64,
            f64::from(total_points) / rounds as f64,
        )
    } else {
        (0.0, 0.0)
    };

    SimulationResult {
        player: config.player.clone(),
        rounds,
        wins,
        losses: rounds - wins,
        win_rate,
        distribution,
        total_points,
        average_points,
        duration,
        rounds_per_second: rounds as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Best possible points for a win, used to scale the score display
#[must_use]
pub fn max_points_per_round() -> u32 {
    score(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_ATTEMPTS;

    fn seeded(rounds: usize, seed: u64) -> SimulationConfig {
        SimulationConfig {
            seed: Some(seed),
            ..SimulationConfig::new(rounds)
        }
    }

    #[test]
    fn simulation_counts_every_round() {
        let result = run_simulation(&seeded(40, 11));
        assert_eq!(result.rounds, 40);
        assert_eq!(result.wins + result.losses, 40);
        assert!((0.0..=1.0).contains(&result.win_rate));
    }

    #[test]
    fn simulation_distribution_sums_to_wins() {
        let result = run_simulation(&seeded(60, 3));
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);

        for &guesses in result.distribution.keys() {
            assert!((1..=MAX_ATTEMPTS).contains(&guesses));
        }
    }

    #[test]
    fn simulation_points_match_distribution() {
        let result = run_simulation(&seeded(60, 21));
        let expected: u32 = result
            .distribution
            .iter()
            .map(|(&guesses, &count)| score(guesses) * count as u32)
            .sum();
        assert_eq!(result.total_points, expected);
        assert!(result.total_points <= max_points_per_round() * 60);
    }

    #[test]
    fn simulation_is_reproducible_with_seed() {
        let a = run_simulation(&seeded(30, 99));
        let b = run_simulation(&seeded(30, 99));
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.total_points, b.total_points);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn simulation_with_no_rounds() {
        let result = run_simulation(&seeded(0, 1));
        assert_eq!(result.rounds, 0);
        assert_eq!(result.wins, 0);
        assert!(result.win_rate.abs() < f64::EPSILON);
    }
}
