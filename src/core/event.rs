//! User events and committed-round records.
//!
//! Every user action maps to one `Event`. The front end builds events from
//! taps or typed commands and feeds them to `GameState::apply`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// A discrete user action.
///
/// ## Example
///
/// ```
/// use knockout_scorer::core::{Event, GameState, PlayerId};
///
/// let mut state = GameState::new();
/// state.apply(Event::add_player("Ada")).unwrap();
/// state.apply(Event::add_player("Bob")).unwrap();
/// state.apply(Event::StartGame).unwrap();
/// state.apply(Event::set_round_score(PlayerId::new(1), "12")).unwrap();
/// state.apply(Event::EndRound).unwrap();
///
/// assert_eq!(state.round(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Submit a new player name.
    AddPlayer { name: String },
    /// Tap Start.
    StartGame,
    /// Edit a player's score field for the current round.
    SetRoundScore { player: PlayerId, raw: String },
    /// Tap End Round.
    EndRound,
    /// Tap Play Again.
    Restart,
}

impl Event {
    pub(crate) const ADD_PLAYER: &'static str = "add player";
    pub(crate) const START_GAME: &'static str = "start game";
    pub(crate) const SET_ROUND_SCORE: &'static str = "set round score";
    pub(crate) const END_ROUND: &'static str = "end round";
    pub(crate) const RESTART: &'static str = "restart";

    /// Build an `AddPlayer` event.
    pub fn add_player(name: impl Into<String>) -> Self {
        Event::AddPlayer { name: name.into() }
    }

    /// Build a `SetRoundScore` event.
    pub fn set_round_score(player: PlayerId, raw: impl Into<String>) -> Self {
        Event::SetRoundScore {
            player,
            raw: raw.into(),
        }
    }

    /// Short label for logs and error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Event::AddPlayer { .. } => Self::ADD_PLAYER,
            Event::StartGame => Self::START_GAME,
            Event::SetRoundScore { .. } => Self::SET_ROUND_SCORE,
            Event::EndRound => Self::END_ROUND,
            Event::Restart => Self::RESTART,
        }
    }
}

/// What one committed round did to the roster.
///
/// Sized inline for the usual handful of players.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number that was committed (starts at 1).
    pub round: u32,

    /// Points added to each player who was still in, in roster order.
    pub applied: SmallVec<[(PlayerId, i64); 5]>,

    /// Players knocked out by this round, in roster order.
    pub eliminated: SmallVec<[PlayerId; 5]>,
}

impl RoundRecord {
    /// Create an empty record for a round.
    #[must_use]
    pub fn new(round: u32) -> Self {
        Self {
            round,
            ..Self::default()
        }
    }

    /// Points a player received this round, if they were still in.
    #[must_use]
    pub fn points_for(&self, player: PlayerId) -> Option<i64> {
        self.applied
            .iter()
            .find(|(id, _)| *id == player)
            .map(|&(_, points)| points)
    }

    /// Check if a player was knocked out this round.
    #[must_use]
    pub fn eliminated(&self, player: PlayerId) -> bool {
        self.eliminated.contains(&player)
    }
}
