//! Automatic guessing
//!
//! Used by the `simulate` command to play rounds without a human.

mod engine;

pub use engine::{OPENING_GUESS, Solver};
