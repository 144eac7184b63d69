//! Scoring configuration.
//!
//! The defaults match the standard rules: up to 5 players, at least 2 to
//! start, and anyone whose total goes over 30 is out.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Default roster limit.
pub const MAX_PLAYERS: usize = 5;

/// Default elimination ceiling. A total strictly above this is out.
pub const MAX_SCORE: i64 = 30;

/// Default number of players needed to start.
pub const MIN_PLAYERS: usize = 2;

/// Scoring rules for a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Maximum roster size.
    pub max_players: usize,

    /// Minimum roster size to start a game.
    pub min_players: usize,

    /// Elimination ceiling (exclusive).
    pub max_score: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_players: MAX_PLAYERS,
            min_players: MIN_PLAYERS,
            max_score: MAX_SCORE,
        }
    }
}

impl ScoringConfig {
    /// Set the roster limit.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Set the minimum players to start.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    /// Set the elimination ceiling.
    #[must_use]
    pub fn with_max_score(mut self, max: i64) -> Self {
        self.max_score = max;
        self
    }

    /// Check that the limits are consistent.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_players == 0 {
            return Err(GameError::InvalidConfig {
                message: "min_players must be at least 1".to_string(),
            });
        }
        if self.max_players < self.min_players {
            return Err(GameError::InvalidConfig {
                message: format!(
                    "max_players ({}) is below min_players ({})",
                    self.max_players, self.min_players
                ),
            });
        }
        Ok(())
    }
}
