//! End-of-game detection and transition results.

use serde::{Deserialize, Serialize};

use crate::core::event::RoundRecord;
use crate::core::player::PlayerId;
use crate::core::roster::Roster;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// Last player standing.
    Player(PlayerId),
    /// Everyone still in went out in the same round.
    NoWinner,
}

impl Winner {
    /// The winning player, if there is one.
    #[must_use]
    pub const fn player(&self) -> Option<PlayerId> {
        match self {
            Winner::Player(p) => Some(*p),
            Winner::NoWinner => None,
        }
    }
}

/// Decide whether the game is over.
///
/// Only the number of survivors matters: one survivor wins, zero survivors
/// means no winner. Scores of eliminated players are never compared.
#[must_use]
pub fn decide_winner(roster: &Roster) -> Option<Winner> {
    match roster.active_count() {
        0 => Some(Winner::NoWinner),
        1 => roster.active().next().map(|last| Winner::Player(last.id)),
        _ => None,
    }
}

/// What committing a round produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Per-player points and eliminations for the round.
    pub record: RoundRecord,

    /// Set when this round ended the game.
    pub winner: Option<Winner>,
}

impl RoundOutcome {
    /// Check if the round ended the game.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.winner.is_some()
    }
}

/// Successful result of applying an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    PlayerAdded(PlayerId),
    GameStarted,
    /// `stored` is false when the entry was ignored.
    ScoreEntered { player: PlayerId, stored: bool },
    RoundEnded(RoundOutcome),
    Restarted,
}
