//! GameMatch (scored match) and Side.

use crate::models::fixture::Fixture;
use crate::models::player::{assigned_player, DrawAssignment};
use crate::models::team::TeamId;
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which side of a match a value refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// A match with live scoring. Scores and `played_at` are all set or all `None`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub round: u32,
    pub match_number: u32,
    pub home_team: Option<TeamId>,
    pub away_team: Option<TeamId>,
    /// Email of the player drawn to the home team.
    pub home_player: Option<String>,
    pub away_player: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub played_at: Option<DateTime<Utc>>,
}

impl GameMatch {
    /// Unplayed match between two teams.
    pub fn new(tournament_id: TournamentId, round: u32, home: TeamId, away: TeamId) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            round,
            match_number: 0,
            home_team: Some(home),
            away_team: Some(away),
            home_player: None,
            away_player: None,
            home_score: None,
            away_score: None,
            played_at: None,
        }
    }

    /// Unplayed match for a fixture; each side's player comes from the draw, if any.
    pub fn from_fixture(fixture: &Fixture, assignments: &[DrawAssignment]) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id: fixture.tournament_id,
            round: fixture.round,
            match_number: fixture.match_number,
            home_player: assigned_player(assignments, fixture.home.as_deref()),
            away_player: assigned_player(assignments, fixture.away.as_deref()),
            home_team: fixture.home.clone(),
            away_team: fixture.away.clone(),
            home_score: None,
            away_score: None,
            played_at: None,
        }
    }

    /// Builder-style: the same match with a final score (no timestamp check).
    pub fn with_score(mut self, home: u32, away: u32, played_at: DateTime<Utc>) -> Self {
        self.home_score = Some(home);
        self.away_score = Some(away);
        self.played_at = Some(played_at);
        self
    }

    /// Both teams known and both scores recorded.
    pub fn is_played(&self) -> bool {
        self.home_team.is_some()
            && self.away_team.is_some()
            && self.home_score.is_some()
            && self.away_score.is_some()
    }
}
