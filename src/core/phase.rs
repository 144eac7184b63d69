//! Coarse-grained stage of a session.

use serde::{Deserialize, Serialize};

/// Game phase.
///
/// `Setup → InProgress → Finished`. Restarting returns to `Setup` from any
/// phase by discarding the whole session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players are being added.
    #[default]
    Setup,
    /// Rounds are being scored.
    InProgress,
    /// At most one player remains.
    Finished,
}

impl Phase {
    /// Check if rounds can be scored.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Phase::InProgress)
    }

    /// Check if the game has ended.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Phase::Finished)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Setup => write!(f, "setup"),
            Phase::InProgress => write!(f, "the game"),
            Phase::Finished => write!(f, "game over"),
        }
    }
}
