//! Engine logic: fixture generation, draw, roster gate, standings and results.

mod draw;
mod results;
mod roster_gate;
mod round_robin;
mod standings;
mod two_round;

pub use draw::draw;
pub use results::{clear_result, parse_score, record_result, score_from_json};
pub use roster_gate::{
    GateEffect, GateState, GateTransition, RosterGate, RosterGates, MIN_ROSTER_PLAYERS,
};
pub use round_robin::{generate_round_robin, round_robin_fixtures, ScheduledPairing};
pub use standings::{compute_standings, write_standings_csv};
pub use two_round::{build_two_round_fixtures, TwoRoundFixtures, FIRST_ROUND, RETURN_ROUND};
