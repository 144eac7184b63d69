//! Game-over rules and transition results.
//!
//! The state machine calls `decide_winner` after every committed round.
//! A game ends when at most one player is still in.

pub mod engine;

pub use engine::{decide_winner, RoundOutcome, Transition, Winner};
