//! Game orchestration
//!
//! The round state machine and the long-lived player registry.

mod error;
mod registry;
mod session;

pub use error::GameError;
pub use registry::{PlayerRecord, PlayerRegistry};
pub use session::{GameSession, GameStatus, GuessRecord, MAX_ATTEMPTS};
