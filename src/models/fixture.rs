//! Fixture: a planned pairing for one round, distinct from a scored match.

use crate::models::team::TeamId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};

/// How a fixture came to exist.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureSource {
    /// Entered by an admin (round 1 of the two-round format).
    Manual,
    /// Derived by the engine (mirrored round, round-robin schedule).
    AutoGenerated,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub tournament_id: TournamentId,
    pub round: u32,
    /// Unique within (tournament, round).
    pub match_number: u32,
    pub home: Option<TeamId>,
    pub away: Option<TeamId>,
    pub is_bye: bool,
    pub source: FixtureSource,
}

impl Fixture {
    pub fn new(
        tournament_id: TournamentId,
        round: u32,
        match_number: u32,
        home: TeamId,
        away: TeamId,
        source: FixtureSource,
    ) -> Self {
        Self {
            tournament_id,
            round,
            match_number,
            home: Some(home),
            away: Some(away),
            is_bye: false,
            source,
        }
    }

    /// Same pairing with home and away swapped.
    pub fn mirrored(&self, round: u32, source: FixtureSource) -> Self {
        Self {
            tournament_id: self.tournament_id,
            round,
            match_number: self.match_number,
            home: self.away.clone(),
            away: self.home.clone(),
            is_bye: self.is_bye,
            source,
        }
    }
}

/// One caller-entered pairing for round 1.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FixtureDraft {
    pub match_number: u32,
    pub home: TeamId,
    pub away: TeamId,
}

impl FixtureDraft {
    pub fn new(match_number: u32, home: impl Into<TeamId>, away: impl Into<TeamId>) -> Self {
        Self {
            match_number,
            home: home.into(),
            away: away.into(),
        }
    }
}
