//! Plain-text rendering of each screen.

use std::fmt;

use super::Screen;
use crate::core::GameState;
use crate::rules::Winner;

/// Displays the current screen of a state.
pub struct ScreenView<'a>(pub &'a GameState);

/// Render the current screen to a string.
#[must_use]
pub fn render(state: &GameState) -> String {
    ScreenView(state).to_string()
}

/// Name shown on the winner screen.
#[must_use]
pub fn winner_label(state: &GameState) -> Option<String> {
    match state.winner()? {
        Winner::Player(_) => state.winning_player().map(|p| p.name.clone()),
        Winner::NoWinner => Some("No Winner".to_string()),
    }
}

impl fmt::Display for ScreenView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Screen::of(self.0) {
            Screen::Setup => self.setup(f),
            Screen::Round => self.round(f),
            Screen::Winner => self.winner(f),
        }
    }
}

impl ScreenView<'_> {
    fn setup(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "Player Setup")?;
        for player in state.players() {
            writeln!(f, "  {:>3}  {}", player.id, player.name)?;
        }
        if state.can_start() {
            writeln!(f, "[Start Game]")
        } else {
            writeln!(
                f,
                "[Start Game] (add at least {} players)",
                state.config().min_players
            )
        }
    }

    fn round(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "Round {}", state.round())?;
        for player in state.active_players() {
            let entry = state.pending_entry(player.id).unwrap_or("");
            writeln!(
                f,
                "  {:>3}  {:<16} Score: {:>4}  | {}",
                player.id, player.name, player.score, entry
            )?;
        }
        writeln!(f, "[End Round {}]", state.round())?;

        let mut eliminated = state.eliminated_players().peekable();
        if eliminated.peek().is_some() {
            writeln!(f)?;
            writeln!(f, "Eliminated")?;
            for player in eliminated {
                writeln!(f, "  {} (Score: {})", player.name, player.score)?;
            }
        }
        Ok(())
    }

    fn winner(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Winner!")?;
        if let Some(name) = winner_label(self.0) {
            writeln!(f, "{name}")?;
        }
        writeln!(f, "[Play Again]")
    }
}
