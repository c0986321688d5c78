//! Draw: random one-to-one assignment of tournament teams to players.

use crate::logic::roster_gate::{GateState, MIN_ROSTER_PLAYERS};
use crate::models::{DrawAssignment, LeagueError, Player, Team, TournamentId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Assign one team from `team_pool` to each player-role member of `players`.
///
/// 1. The gate must be `Locked`.
/// 2. Players are filtered to role `Player` and sorted by name (then email), so the
///    only randomness is the team order.
/// 3. The pool is shuffled with `rng` and truncated to the player count, then zipped
///    with the players by position.
///
/// The result is a complete replacement for any earlier draw of the tournament.
/// Production callers pass a fresh `rand::thread_rng()`; tests pass a seeded rng.
pub fn draw<R: Rng + ?Sized>(
    tournament_id: TournamentId,
    gate: GateState,
    players: &[Player],
    team_pool: &[Team],
    rng: &mut R,
) -> Result<Vec<DrawAssignment>, LeagueError> {
    if gate != GateState::Locked {
        return Err(LeagueError::RosterNotLocked);
    }

    let mut roster: Vec<&Player> = players.iter().filter(|p| p.is_player()).collect();
    roster.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.email.cmp(&b.email)));

    if roster.len() < MIN_ROSTER_PLAYERS {
        return Err(LeagueError::RosterTooSmall {
            players: roster.len(),
        });
    }
    if team_pool.len() < roster.len() {
        return Err(LeagueError::InsufficientTeamsForPlayers {
            players: roster.len(),
            teams: team_pool.len(),
        });
    }

    let mut teams: Vec<&Team> = team_pool.iter().collect();
    teams.shuffle(rng);
    teams.truncate(roster.len());

    log::debug!(
        "Draw for {}: {} player(s) from a pool of {} team(s)",
        tournament_id,
        roster.len(),
        team_pool.len()
    );

    Ok(roster
        .into_iter()
        .zip(teams)
        .map(|(player, team)| DrawAssignment {
            tournament_id,
            player_email: player.email.clone(),
            team_id: team.id.clone(),
        })
        .collect())
}
