//! Roster lock gate: the draw may only run while a tournament's roster is locked.

use crate::models::{LeagueError, TournamentId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum number of player-role members before the roster can be locked.
pub const MIN_ROSTER_PLAYERS: usize = 2;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    #[default]
    Unlocked,
    Locked,
}

/// What the persisting layer has to write after a transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateEffect {
    RecordLock,
    ClearLock,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GateTransition {
    pub from: GateState,
    pub to: GateState,
    pub effect: GateEffect,
}

/// Gate for a single tournament. `lock` and `unlock` are the only mutators.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RosterGate {
    state: GateState,
}

impl RosterGate {
    pub fn new(state: GateState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == GateState::Locked
    }

    /// Lock the roster. Needs at least two players; locking twice is a no-op transition.
    pub fn lock(&mut self, player_count: usize) -> Result<GateTransition, LeagueError> {
        if player_count < MIN_ROSTER_PLAYERS {
            return Err(LeagueError::RosterTooSmall {
                players: player_count,
            });
        }
        Ok(self.move_to(GateState::Locked, GateEffect::RecordLock))
    }

    /// Re-open the gate. Always allowed; an existing draw stays as it is.
    pub fn unlock(&mut self) -> GateTransition {
        self.move_to(GateState::Unlocked, GateEffect::ClearLock)
    }

    fn move_to(&mut self, to: GateState, effect: GateEffect) -> GateTransition {
        let from = self.state;
        self.state = to;
        log::debug!("Roster gate {:?} -> {:?}", from, to);
        GateTransition { from, to, effect }
    }
}

/// Gate states keyed by tournament, the form a persisting layer stores the lock flag in.
/// `Tournament` keeps its own `RosterGate` inline instead. Tournaments without an entry
/// are unlocked.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RosterGates {
    gates: HashMap<TournamentId, RosterGate>,
}

impl RosterGates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, tournament_id: TournamentId) -> GateState {
        self.gates
            .get(&tournament_id)
            .map(RosterGate::state)
            .unwrap_or_default()
    }

    pub fn lock(
        &mut self,
        tournament_id: TournamentId,
        player_count: usize,
    ) -> Result<GateTransition, LeagueError> {
        let mut gate = self.gates.get(&tournament_id).copied().unwrap_or_default();
        let transition = gate.lock(player_count)?;
        self.gates.insert(tournament_id, gate);
        Ok(transition)
    }

    pub fn unlock(&mut self, tournament_id: TournamentId) -> GateTransition {
        // Unlocked is the default, so clearing the lock drops the entry.
        let mut gate = self.gates.remove(&tournament_id).unwrap_or_default();
        gate.unlock()
    }
}
