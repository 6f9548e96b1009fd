//! Player registry
//!
//! Tracks every distinct player seen across rounds together with their
//! cumulative score. Names are trimmed and then compared exactly, so "Ana"
//! and "ana" are different players.

use rustc_hash::FxHashMap;
use tracing::debug;

/// One registered player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    name: String,
    score: u32,
}

impl PlayerRecord {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}

/// Long-lived player/score aggregate
///
/// Outlives individual game sessions; sessions borrow it when a round starts
/// or is won. Players are kept in first-registration order and are never
/// removed.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<PlayerRecord>,
    index: FxHashMap<String, usize>,
}

impl PlayerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player by name
    ///
    /// Returns `true` if the player is new. Re-registering an existing name
    /// keeps its position and score. Names that are empty after trimming are
    /// ignored.
    pub fn register(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.index.contains_key(name) {
            return false;
        }

        debug!(player = name, "Registering new player");
        self.index.insert(name.to_string(), self.players.len());
        self.players.push(PlayerRecord {
            name: name.to_string(),
            score: 0,
        });
        true
    }

    /// Add points to a player's cumulative score, registering them first if needed
    ///
    /// Returns the new total (0 for an empty name, which is ignored).
    pub fn add_score(&mut self, name: &str, points: u32) -> u32 {
        let name = name.trim();
        if name.is_empty() {
            return 0;
        }

        self.register(name);
        let Some(&position) = self.index.get(name) else {
            return 0;
        };
        let record = &mut self.players[position];
        record.score = record.score.saturating_add(points);
        debug!(player = name, points, total = record.score, "Score updated");
        record.score
    }

    /// All players with their scores, in registration order
    #[must_use]
    pub fn all_players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Cumulative score for a player, if registered
    #[must_use]
    pub fn score_of(&self, name: &str) -> Option<u32> {
        self.index
            .get(name.trim())
            .map(|&position| self.players[position].score)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name.trim())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
