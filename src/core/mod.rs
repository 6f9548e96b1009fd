//! Core domain types for Mastermind
//!
//! Colors, codes, feedback evaluation, secret generation and scoring.
//! Everything here is pure apart from the random source behind
//! [`RandomCodeGenerator`].

mod code;
mod color;
mod feedback;
mod generator;
mod score;

pub use code::{CODE_LENGTH, Code, CodeParseError, GuessInput, TOTAL_CODES};
pub use color::{Color, PALETTE, PALETTE_SIZE};
pub use feedback::Feedback;
pub use generator::{CodeGenerator, FixedCodeGenerator, RandomCodeGenerator};
pub use score::{BASE_POINTS, POINTS_PER_GUESS, score};
