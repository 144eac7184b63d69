//! # knockout-scorer
//!
//! Score tracking for multi-round elimination card games.
//!
//! Players are added during setup, each round's scores are entered and then
//! committed together, and anyone whose running total goes over the ceiling
//! (30 by default) is out. The game ends as soon as at most one player is
//! left: the survivor wins, or nobody does if the last contenders all went
//! out in the same round.
//!
//! ## Design
//!
//! - **One owner**: `GameState` holds the whole session and is mutated only
//!   through its transition methods (or `GameState::apply` with an `Event`).
//!
//! - **Parse late**: round scores are kept as raw text until the round is
//!   committed; text without a leading integer counts as zero.
//!
//! - **Pure views**: `view::Screen` is derived from state and rendered to
//!   text without touching it.
//!
//! ## Modules
//!
//! - `core`: Players, roster, entries, events, configuration, state
//! - `rules`: Game-over detection and transition results
//! - `view`: Screen selection and text rendering
//! - `error`: Validation errors and user-facing notices
//!
//! ## Example
//!
//! ```
//! use knockout_scorer::{GameState, Phase, Winner};
//!
//! let mut game = GameState::new();
//! let ada = game.add_player("Ada").unwrap();
//! let bob = game.add_player("Bob").unwrap();
//! game.start_game().unwrap();
//!
//! game.set_round_score(ada, "12");
//! game.set_round_score(bob, "31");
//! let outcome = game.end_round().unwrap();
//!
//! assert_eq!(outcome.winner, Some(Winner::Player(ada)));
//! assert_eq!(game.phase(), Phase::Finished);
//! ```

pub mod core;
pub mod rules;
pub mod view;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, Roster,
    RoundEntries, parse_score_entry,
    Phase, ScoringConfig, MAX_PLAYERS, MAX_SCORE, MIN_PLAYERS,
    Event, RoundRecord,
    GameState,
};

pub use crate::rules::{RoundOutcome, Transition, Winner};

pub use crate::view::Screen;

pub use crate::error::{GameError, Notice};
