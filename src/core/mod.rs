//! Core scoring types: players, roster, entries, events, state.
//!
//! `GameState` is the only thing a front end needs to hold. Everything else
//! here is a building block it exposes through its queries.

pub mod player;
pub mod roster;
pub mod entry;
pub mod phase;
pub mod config;
pub mod event;
pub mod state;

pub use player::{Player, PlayerId};
pub use roster::Roster;
pub use entry::{parse_score_entry, RoundEntries};
pub use phase::Phase;
pub use config::{ScoringConfig, MAX_PLAYERS, MAX_SCORE, MIN_PLAYERS};
pub use event::{Event, RoundRecord};
pub use state::GameState;
