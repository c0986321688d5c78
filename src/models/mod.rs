//! Data structures for the league: teams, players, fixtures, matches, standings.

mod fixture;
mod game;
mod player;
mod standing;
mod team;
mod tournament;

pub use fixture::{Fixture, FixtureDraft, FixtureSource};
pub use game::{GameMatch, MatchId, Side};
pub use player::{assigned_player, DrawAssignment, Player, Role};
pub use standing::{StandingRow, POINTS_FOR_DRAW, POINTS_FOR_WIN};
pub use team::{read_teams_csv, Team, TeamId, TournamentTeam};
pub use tournament::{LeagueError, RosterStatus, Tournament, TournamentId};
