//! Ordered, bounded player list.
//!
//! Insertion order is display order. Ids come from a counter owned by the
//! roster, so they stay unique even when names repeat.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::entry::trim_input;
use super::player::{Player, PlayerId};
use crate::error::GameError;

/// The players in a session, in the order they were added.
///
/// ## Example
///
/// ```
/// use knockout_scorer::core::Roster;
///
/// let mut roster = Roster::new();
/// let ada = roster.add("  Ada ", 5).unwrap();
/// let bob = roster.add("Bob", 5).unwrap();
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.get(ada).unwrap().name, "Ada");
/// assert_ne!(ada, bob);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RosterData")]
pub struct Roster {
    players: Vec<Player>,
    next_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a player, trimming the name.
    ///
    /// Rejects blank names first, then a full roster.
    pub fn add(&mut self, name: &str, max_players: usize) -> Result<PlayerId, GameError> {
        let name = trim_input(name);
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        if self.players.len() >= max_players {
            return Err(GameError::RosterFull { max: max_players });
        }

        let id = PlayerId(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or_else(|| GameError::InvalidState {
            message: "player ids exhausted".to_string(),
        })?;
        self.players.push(Player::new(id, name));
        Ok(id)
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if no players have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// All players, in insertion order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Iterate mutably over all players.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Players still in the game.
    pub fn active(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_out)
    }

    /// Players who went over the ceiling.
    pub fn eliminated(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_out)
    }

    /// Count of players still in the game.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}

/// Wire shape of `Roster`, checked before it becomes one.
#[derive(Deserialize)]
struct RosterData {
    players: Vec<Player>,
    next_id: u32,
}

impl TryFrom<RosterData> for Roster {
    type Error = GameError;

    /// Ids must be unique and below the counter, names non-blank.
    fn try_from(data: RosterData) -> Result<Self, Self::Error> {
        let invalid = |message: String| GameError::InvalidState { message };

        let mut seen = FxHashSet::default();
        for player in &data.players {
            if !seen.insert(player.id) {
                return Err(invalid(format!("duplicate player id {}", player.id)));
            }
            if player.id.raw() >= data.next_id {
                return Err(invalid(format!(
                    "player id {} is not below next id {}",
                    player.id, data.next_id
                )));
            }
            if trim_input(&player.name).is_empty() {
                return Err(invalid(format!("player {} has an empty name", player.id)));
            }
        }

        Ok(Self {
            players: data.players,
            next_id: data.next_id,
        })
    }
}
