//! Player identification and per-player scoring data.
//!
//! ## PlayerId
//!
//! Stable identifier handed out by the roster in creation order.
//! Ids are never reused within a session.
//!
//! ## Player
//!
//! Name, cumulative score and elimination flag.

use serde::{Deserialize, Serialize};

/// Player identifier, unique within a session.
///
/// The first player added is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&format!("#{}", self.0))
    }
}

impl std::str::FromStr for PlayerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(PlayerId)
    }
}

/// A player on the roster.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    /// Display name, already trimmed.
    pub name: String,

    /// Sum of every round score applied so far.
    pub score: i64,

    /// Set once `score` went over the ceiling. Never cleared mid-game.
    pub is_out: bool,
}

impl Player {
    /// Create a fresh player with zero score.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            is_out: false,
        }
    }

    /// Check if the player is still in the game.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_out
    }

    /// Add a round score and update the elimination flag.
    ///
    /// Returns true if this call eliminated the player. Players who are
    /// already out are left untouched.
    pub fn apply_round(&mut self, points: i64, max_score: i64) -> bool {
        if self.is_out {
            return false;
        }
        self.score = self.score.saturating_add(points);
        self.is_out = self.score > max_score;
        self.is_out
    }
}
