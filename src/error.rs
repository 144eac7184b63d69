//! Validation errors surfaced to the player.
//!
//! Every rejected operation leaves the state untouched, so none of these
//! is fatal. The front end shows them as an immediate notice.

use thiserror::Error;

use crate::core::Phase;

/// Why an operation on the game state was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Player name was empty after trimming.
    #[error("player name cannot be empty")]
    EmptyName,

    /// The roster already holds the maximum number of players.
    #[error("roster is full ({max} players)")]
    RosterFull { max: usize },

    /// Not enough players to start a game.
    #[error("need at least {need} players to start, have {have}")]
    InsufficientPlayers { have: usize, need: usize },

    /// Operation is not available in the current phase.
    #[error("{operation} is not allowed during {phase}")]
    WrongPhase {
        operation: &'static str,
        phase: Phase,
    },

    /// Scoring configuration is inconsistent.
    #[error("invalid scoring config: {message}")]
    InvalidConfig { message: String },

    /// Loaded or accumulated state breaks a game invariant.
    #[error("invalid game state: {message}")]
    InvalidState { message: String },
}

/// A user-facing notice: short title plus explanation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

impl GameError {
    /// The notice the front end should display for this error.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            GameError::EmptyName => Notice {
                title: "Hold On!",
                message: "Player name cannot be empty.".to_string(),
            },
            GameError::RosterFull { max } => Notice {
                title: "Too many players!",
                message: format!("You can only have up to {max} players."),
            },
            GameError::InsufficientPlayers { need, .. } => Notice {
                title: "Not enough players",
                message: format!("Please add at least {need} players to start."),
            },
            GameError::WrongPhase { .. } => Notice {
                title: "Not now",
                message: format!("{}.", capitalize(&self.to_string())),
            },
            GameError::InvalidConfig { message } => Notice {
                title: "Bad settings",
                message: message.clone(),
            },
            GameError::InvalidState { message } => Notice {
                title: "Something went wrong",
                message: format!("{}.", capitalize(message)),
            },
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
