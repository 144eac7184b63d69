//! Game state and its transitions.
//!
//! ## GameState
//!
//! Everything a session knows:
//! - Roster (names, totals, elimination flags)
//! - Pending round entries
//! - Phase, round counter, winner
//! - History of committed rounds
//!
//! Every operation either applies completely or returns a `GameError` and
//! leaves the state exactly as it was. Deserialized states are checked the
//! same way before they are accepted.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::ScoringConfig;
use super::entry::{trim_input, RoundEntries};
use super::event::{Event, RoundRecord};
use super::phase::Phase;
use super::player::{Player, PlayerId};
use super::roster::Roster;
use crate::error::GameError;
use crate::rules::{decide_winner, RoundOutcome, Transition, Winner};

/// Complete state of one scoring session.
///
/// `history` uses an `im` persistent vector so snapshots stay cheap to
/// clone as rounds accumulate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateData")]
pub struct GameState {
    config: ScoringConfig,
    roster: Roster,
    entries: RoundEntries,
    phase: Phase,
    /// Round being entered (starts at 1).
    round: u32,
    winner: Option<Winner>,
    history: Vector<RoundRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an empty session with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(ScoringConfig::default())
    }

    /// Create an empty session with custom rules.
    pub fn with_config(config: ScoringConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: ScoringConfig) -> Self {
        Self {
            config,
            roster: Roster::new(),
            entries: RoundEntries::new(),
            phase: Phase::Setup,
            round: 1,
            winner: None,
            history: Vector::new(),
        }
    }

    // === Queries ===

    /// Scoring rules in effect.
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// All players, in the order they were added.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.get(id)
    }

    /// Players still in the game.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.roster.active()
    }

    /// Players who went over the ceiling.
    pub fn eliminated_players(&self) -> impl Iterator<Item = &Player> {
        self.roster.eliminated()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Round currently being entered.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Set once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// The winning player's record, if the game ended with one.
    #[must_use]
    pub fn winning_player(&self) -> Option<&Player> {
        self.winner
            .and_then(|w| w.player())
            .and_then(|id| self.player(id))
    }

    /// Raw text entered for a player this round.
    #[must_use]
    pub fn pending_entry(&self, player: PlayerId) -> Option<&str> {
        self.entries.raw(player)
    }

    /// Committed rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// Check if the roster is big enough to start.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.roster.len() >= self.config.min_players
    }

    // === Transitions ===

    /// Add a player during setup.
    ///
    /// Returns the new player's id.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, GameError> {
        self.require_phase(Phase::Setup, Event::ADD_PLAYER)?;
        let id = self.roster.add(name, self.config.max_players)?;

        debug!(player = %id, name = trim_input(name), roster_size = self.roster.len(), "player added");
        Ok(id)
    }

    /// Leave setup and begin scoring rounds.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Setup, Event::START_GAME)?;
        if !self.can_start() {
            return Err(GameError::InsufficientPlayers {
                have: self.roster.len(),
                need: self.config.min_players,
            });
        }

        self.phase = Phase::InProgress;
        info!(players = self.roster.len(), "game started");
        Ok(())
    }

    /// Record raw score text for a player in the current round.
    ///
    /// Text is not validated until the round ends. Ignored (returns false)
    /// for unknown or eliminated players and outside a running game.
    pub fn set_round_score(&mut self, player: PlayerId, raw: impl Into<String>) -> bool {
        let accepts = self.phase.is_in_progress()
            && self.roster.get(player).is_some_and(Player::is_active);
        if !accepts {
            return false;
        }

        let raw = raw.into();
        debug!(player = %player, raw = %raw, round = self.round, "round score entered");
        self.entries.set(player, raw);
        true
    }

    /// Commit the current round.
    ///
    /// Adds each active player's entry to their total, eliminates anyone
    /// over the ceiling, advances the round and clears the entries. Ends the
    /// game when at most one player is left.
    pub fn end_round(&mut self) -> Result<RoundOutcome, GameError> {
        self.require_phase(Phase::InProgress, Event::END_ROUND)?;

        let max_score = self.config.max_score;
        let mut record = RoundRecord::new(self.round);

        for player in self.roster.iter_mut().filter(|p| p.is_active()) {
            let points = self.entries.points(player.id);
            record.applied.push((player.id, points));

            if player.apply_round(points, max_score) {
                info!(player = %player.id, name = %player.name, score = player.score, "player eliminated");
                record.eliminated.push(player.id);
            }
        }

        debug!(round = self.round, applied = record.applied.len(), "round committed");
        self.round += 1;
        self.entries.clear();

        let winner = decide_winner(&self.roster);
        if let Some(winner) = winner {
            self.phase = Phase::Finished;
            self.winner = Some(winner);
            info!(?winner, rounds = record.round, "game finished");
        }

        self.history.push_back(record.clone());
        Ok(RoundOutcome { record, winner })
    }

    /// Discard the session and return to an empty setup.
    pub fn restart_game(&mut self) {
        info!(phase = ?self.phase, round = self.round, "game restarted");
        *self = Self::from_config(self.config.clone());
    }

    /// Apply a user event.
    ///
    /// Rejected events are returned as errors and not logged.
    pub fn apply(&mut self, event: Event) -> Result<Transition, GameError> {
        let label = event.label();
        let transition = match event {
            Event::AddPlayer { name } => Transition::PlayerAdded(self.add_player(&name)?),
            Event::StartGame => {
                self.start_game()?;
                Transition::GameStarted
            }
            Event::SetRoundScore { player, raw } => {
                let stored = self.set_round_score(player, raw);
                Transition::ScoreEntered { player, stored }
            }
            Event::EndRound => Transition::RoundEnded(self.end_round()?),
            Event::Restart => {
                self.restart_game();
                Transition::Restarted
            }
        };

        debug!(event = label, phase = %self.phase, "event applied");
        Ok(transition)
    }

    fn require_phase(&self, expected: Phase, operation: &'static str) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                operation,
                phase: self.phase,
            })
        }
    }
}

/// Wire shape of `GameState`, checked before it becomes one.
#[derive(Deserialize)]
struct StateData {
    config: ScoringConfig,
    roster: Roster,
    entries: RoundEntries,
    phase: Phase,
    round: u32,
    winner: Option<Winner>,
    history: Vector<RoundRecord>,
}

impl TryFrom<StateData> for GameState {
    type Error = GameError;

    fn try_from(data: StateData) -> Result<Self, Self::Error> {
        let invalid = |message: String| GameError::InvalidState { message };

        data.config.validate()?;
        if data.roster.len() > data.config.max_players {
            return Err(invalid(format!(
                "{} players exceeds the limit of {}",
                data.roster.len(),
                data.config.max_players
            )));
        }
        if data.round == 0 {
            return Err(invalid("round numbers start at 1".to_string()));
        }
        if data.winner.is_some() != data.phase.is_finished() {
            return Err(invalid(format!(
                "winner must be set exactly when the game is over (phase {:?})",
                data.phase
            )));
        }
        if let Some(id) = data.winner.and_then(|w| w.player()) {
            if data.roster.get(id).is_none() {
                return Err(invalid(format!("winner {id} is not on the roster")));
            }
        }

        Ok(Self {
            config: data.config,
            roster: data.roster,
            entries: data.entries,
            phase: data.phase,
            round: data.round,
            winner: data.winner,
            history: data.history,
        })
    }
}
