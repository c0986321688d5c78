//! Tournament aggregate and LeagueError.

use crate::logic::{
    build_two_round_fixtures, clear_result, compute_standings, draw, record_result,
    round_robin_fixtures, GateState, GateTransition, RosterGate,
};
use crate::models::fixture::{Fixture, FixtureDraft};
use crate::models::game::{GameMatch, MatchId, Side};
use crate::models::player::{assigned_player, DrawAssignment, Player};
use crate::models::standing::StandingRow;
use crate::models::team::{read_teams_csv, Team, TeamId, TournamentTeam};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::Read;
use uuid::Uuid;

/// Errors returned by engine operations. All are local validation failures.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// Round-robin needs at least two teams.
    InsufficientTeams { count: usize },
    /// A manual pairing has a blank home or away team.
    IncompletePairing { match_number: u32 },
    /// A manual pairing puts a team against itself.
    SelfPairing { match_number: u32, team: TeamId },
    /// A team is used more than once in round 1.
    DuplicateTeamUsage { match_number: u32, team: TeamId },
    /// Two manual pairings share a match number.
    DuplicateMatchNumber { match_number: u32 },
    /// The pool has fewer teams than there are players to draw.
    InsufficientTeamsForPlayers { players: usize, teams: usize },
    /// Fewer than two players on the roster.
    RosterTooSmall { players: usize },
    /// The draw was requested while the roster is unlocked.
    RosterNotLocked,
    /// A score is not a non-negative integer.
    InvalidScore { side: Side, raw: String },
    MatchNotFound(MatchId),
    TeamNotFound(TeamId),
    PlayerNotFound(String),
    /// A team with this id is already in the pool.
    DuplicateTeam(TeamId),
    /// A player with this email already exists (case-insensitive).
    DuplicatePlayer(String),
    /// The team is referenced by the active draw or by a fixture.
    TeamInUse(TeamId),
    /// The player is referenced by the active draw.
    PlayerInUse(String),
    /// Blank id, name or email.
    InvalidName,
    /// Malformed CSV input.
    Csv(String),
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::InsufficientTeams { count } => {
                write!(f, "Insufficient teams: need at least 2, got {}", count)
            }
            LeagueError::IncompletePairing { match_number } => {
                write!(f, "Incomplete pairing in match {}", match_number)
            }
            LeagueError::SelfPairing { match_number, team } => {
                write!(f, "Match {} pairs team {} against itself", match_number, team)
            }
            LeagueError::DuplicateTeamUsage { match_number, team } => {
                write!(f, "Team {} is used more than once (match {})", team, match_number)
            }
            LeagueError::DuplicateMatchNumber { match_number } => {
                write!(f, "Match number {} is used more than once", match_number)
            }
            LeagueError::InsufficientTeamsForPlayers { players, teams } => write!(
                f,
                "Insufficient teams for players: {} players, {} teams",
                players, teams
            ),
            LeagueError::RosterTooSmall { players } => {
                write!(f, "Roster too small: need at least 2 players, got {}", players)
            }
            LeagueError::RosterNotLocked => write!(f, "Roster not locked"),
            LeagueError::InvalidScore { side, raw } => {
                write!(f, "Invalid {} score: {:?}", side, raw)
            }
            LeagueError::MatchNotFound(_) => write!(f, "Match not found"),
            LeagueError::TeamNotFound(id) => write!(f, "Team {} not found", id),
            LeagueError::PlayerNotFound(email) => write!(f, "Player {} not found", email),
            LeagueError::DuplicateTeam(id) => write!(f, "A team with id {} already exists", id),
            LeagueError::DuplicatePlayer(email) => {
                write!(f, "A player with email {} already exists", email)
            }
            LeagueError::TeamInUse(id) => {
                write!(f, "Team {} is used by the draw or the fixtures", id)
            }
            LeagueError::PlayerInUse(email) => write!(f, "Player {} is used by the draw", email),
            LeagueError::InvalidName => write!(f, "Id, name and email must not be blank"),
            LeagueError::Csv(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for LeagueError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Where the roster workflow stands: unlocked → locked → drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterStatus {
    Unlocked,
    Locked,
    /// Locked and an assignment set is active.
    Drawn,
}

/// In-memory records for one tournament. Every method either applies fully or leaves
/// the tournament untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Team pool, in registration order (also the standings tie order).
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub gate: RosterGate,
    /// Active draw; at most one set at a time.
    pub assignments: Vec<DrawAssignment>,
    pub fixtures: Vec<Fixture>,
    /// One match per non-bye fixture.
    pub matches: Vec<GameMatch>,
}

impl Tournament {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            teams: Vec::new(),
            players: Vec::new(),
            gate: RosterGate::default(),
            assignments: Vec::new(),
            fixtures: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Register a team. Ids are unique within the pool.
    pub fn add_team(&mut self, team: Team) -> Result<(), LeagueError> {
        let id = team.id.trim();
        let name = team.name.trim();
        if id.is_empty() || name.is_empty() {
            return Err(LeagueError::InvalidName);
        }
        if self.teams.iter().any(|t| t.id == id) {
            return Err(LeagueError::DuplicateTeam(id.to_string()));
        }
        self.teams.push(Team::new(id, name));
        Ok(())
    }

    /// Register every team in a CSV (`id,name`). Nothing is added if any row is rejected.
    pub fn import_teams_csv<R: Read>(&mut self, reader: R) -> Result<usize, LeagueError> {
        let teams = read_teams_csv(reader)?;
        let before = self.teams.len();
        for team in teams {
            if let Err(e) = self.add_team(team) {
                self.teams.truncate(before);
                return Err(e);
            }
        }
        let added = self.teams.len() - before;
        log::debug!("Imported {} team(s) into {}", added, self.id);
        Ok(added)
    }

    /// Pool registrations as stored records.
    pub fn registrations(&self) -> Vec<TournamentTeam> {
        self.teams
            .iter()
            .map(|t| TournamentTeam {
                tournament_id: self.id,
                team_id: t.id.clone(),
            })
            .collect()
    }

    /// Unregister a team. Refused while the draw or any fixture still names it.
    pub fn remove_team(&mut self, team_id: &str) -> Result<(), LeagueError> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or_else(|| LeagueError::TeamNotFound(team_id.to_string()))?;
        let drawn = self.assignments.iter().any(|a| a.team_id == team_id);
        let scheduled = self.fixtures.iter().any(|f| {
            f.home.as_deref() == Some(team_id) || f.away.as_deref() == Some(team_id)
        });
        if drawn || scheduled {
            return Err(LeagueError::TeamInUse(team_id.to_string()));
        }
        self.teams.remove(idx);
        Ok(())
    }

    /// Add a roster member. Emails are unique (case-insensitive).
    pub fn add_player(&mut self, player: Player) -> Result<(), LeagueError> {
        let email = player.email.trim();
        let name = player.name.trim();
        if email.is_empty() || name.is_empty() {
            return Err(LeagueError::InvalidName);
        }
        if self.players.iter().any(|p| p.same_email(email)) {
            return Err(LeagueError::DuplicatePlayer(email.to_string()));
        }
        self.players.push(Player::with_role(email, name, player.role));
        Ok(())
    }

    /// Remove a roster member. Refused while the draw assigns them a team.
    pub fn remove_player(&mut self, email: &str) -> Result<(), LeagueError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.same_email(email))
            .ok_or_else(|| LeagueError::PlayerNotFound(email.to_string()))?;
        let stored = &self.players[idx].email;
        if self.assignments.iter().any(|a| &a.player_email == stored) {
            return Err(LeagueError::PlayerInUse(stored.clone()));
        }
        self.players.remove(idx);
        Ok(())
    }

    /// Members with role `Player`, sorted by name then email.
    pub fn roster_players(&self) -> Vec<Player> {
        let mut roster: Vec<Player> = self.players.iter().filter(|p| p.is_player()).cloned().collect();
        roster.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.email.cmp(&b.email)));
        roster
    }

    pub fn lock_roster(&mut self) -> Result<GateTransition, LeagueError> {
        self.gate.lock(self.roster_players().len())
    }

    /// Re-open the gate. The active draw, if any, is kept.
    pub fn unlock_roster(&mut self) -> GateTransition {
        self.gate.unlock()
    }

    pub fn roster_status(&self) -> RosterStatus {
        match self.gate.state() {
            GateState::Unlocked => RosterStatus::Unlocked,
            GateState::Locked if self.assignments.is_empty() => RosterStatus::Locked,
            GateState::Locked => RosterStatus::Drawn,
        }
    }

    /// Draw teams for players, replacing any previous draw. Existing matches pick up the
    /// new player assignments.
    pub fn run_draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&[DrawAssignment], LeagueError> {
        let assignments = draw(self.id, self.gate.state(), &self.players, &self.teams, rng)?;
        self.assignments = assignments;
        for m in &mut self.matches {
            m.home_player = assigned_player(&self.assignments, m.home_team.as_deref());
            m.away_player = assigned_player(&self.assignments, m.away_team.as_deref());
        }
        log::debug!("Drew {} assignment(s) for {}", self.assignments.len(), self.id);
        Ok(&self.assignments)
    }

    /// Validate round 1, mirror it into round 2 and replace all fixtures. Every team named
    /// in round 1 must be registered in the pool.
    pub fn set_two_round_fixtures(&mut self, drafts: &[FixtureDraft]) -> Result<&[Fixture], LeagueError> {
        let built = build_two_round_fixtures(self.id, drafts)?;
        for f in &built.round1 {
            for team in [&f.home, &f.away].into_iter().flatten() {
                if !self.teams.iter().any(|t| &t.id == team) {
                    return Err(LeagueError::TeamNotFound(team.clone()));
                }
            }
        }
        self.replace_fixtures(built.into_fixtures());
        Ok(&self.fixtures)
    }

    /// Generate a round-robin over the pool (in pool order) and replace all fixtures.
    pub fn set_round_robin_fixtures(&mut self, double: bool) -> Result<&[Fixture], LeagueError> {
        let ids: Vec<TeamId> = self.teams.iter().map(|t| t.id.clone()).collect();
        let fixtures = round_robin_fixtures(self.id, &ids, double)?;
        self.replace_fixtures(fixtures);
        Ok(&self.fixtures)
    }

    /// Full replace: previous fixtures and their matches (scores included) are discarded.
    pub fn replace_fixtures(&mut self, fixtures: Vec<Fixture>) {
        let matches: Vec<GameMatch> = fixtures
            .iter()
            .filter(|f| !f.is_bye)
            .map(|f| GameMatch::from_fixture(f, &self.assignments))
            .collect();
        log::debug!(
            "Replacing {} fixture(s) with {} for {}",
            self.fixtures.len(),
            fixtures.len(),
            self.id
        );
        self.fixtures = fixtures;
        self.matches = matches;
    }

    pub fn get_match(&self, match_id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    fn get_match_mut(&mut self, match_id: MatchId) -> Result<&mut GameMatch, LeagueError> {
        self.matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(LeagueError::MatchNotFound(match_id))
    }

    /// Record a score, stamping the current time.
    pub fn record_result(
        &mut self,
        match_id: MatchId,
        home_score: i64,
        away_score: i64,
    ) -> Result<&GameMatch, LeagueError> {
        self.record_result_at(match_id, home_score, away_score, Utc::now())
    }

    pub fn record_result_at(
        &mut self,
        match_id: MatchId,
        home_score: i64,
        away_score: i64,
        played_at: DateTime<Utc>,
    ) -> Result<&GameMatch, LeagueError> {
        let m = self.get_match_mut(match_id)?;
        *m = record_result(m, home_score, away_score, played_at)?;
        Ok(m)
    }

    /// Return a match to the unplayed state.
    pub fn clear_result(&mut self, match_id: MatchId) -> Result<&GameMatch, LeagueError> {
        let m = self.get_match_mut(match_id)?;
        *m = clear_result(m);
        Ok(m)
    }

    /// League table, recomputed from the current matches.
    pub fn standings(&self) -> Vec<StandingRow> {
        compute_standings(&self.teams, &self.matches)
    }
}
