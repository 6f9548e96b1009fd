//! Command implementations

pub mod check;
pub mod simple;
pub mod simulate;

pub use check::{CheckResult, check_codes};
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationResult, max_points_per_round, run_simulation};
