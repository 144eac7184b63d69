//! Screen selection and text rendering.
//!
//! The front end never decides what to show on its own: `Screen::of` picks
//! the screen from state and `render` draws it. Neither mutates anything.

mod text;

pub use text::{render, winner_label, ScreenView};

use serde::{Deserialize, Serialize};

use crate::core::GameState;

/// Which screen the front end shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// Roster entry with a Start button.
    Setup,
    /// Score entry for the current round.
    Round,
    /// Final result with a Play Again button.
    Winner,
}

impl Screen {
    /// Pick the screen for a state.
    ///
    /// A finished game always has a decided winner, so it takes precedence.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        if state.phase().is_finished() {
            Screen::Winner
        } else if state.phase().is_in_progress() {
            Screen::Round
        } else {
            Screen::Setup
        }
    }
}
