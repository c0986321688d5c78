//! League engine: library with models and scheduling / standings logic.

pub mod logic;
pub mod models;

pub use logic::{
    build_two_round_fixtures, clear_result, compute_standings, draw, generate_round_robin,
    parse_score, record_result, round_robin_fixtures, score_from_json, write_standings_csv,
    GateEffect, GateState, GateTransition, RosterGate, RosterGates, ScheduledPairing,
    TwoRoundFixtures,
};
pub use models::{
    DrawAssignment, Fixture, FixtureDraft, FixtureSource, GameMatch, LeagueError, MatchId, Player,
    Role, RosterStatus, Side, StandingRow, Team, TeamId, Tournament, TournamentId, TournamentTeam,
};
