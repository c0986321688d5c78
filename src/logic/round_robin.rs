//! Round-robin schedule by the circle method, with bye handling and an optional second leg.

use crate::models::{Fixture, FixtureSource, LeagueError, TeamId, TournamentId};
use serde::{Deserialize, Serialize};

/// One emitted pairing of the schedule.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPairing {
    pub round: u32,
    pub home: TeamId,
    pub away: TeamId,
}

/// Generate a full round-robin over `team_ids`.
///
/// 1. Odd team counts get one bye slot, so the working size `n` is even.
/// 2. `n - 1` rounds: slot 0 is fixed, the other slots rotate one step per round
///    (the last element becomes the second). Slot `i` meets slot `n - 1 - i`.
/// 3. Odd rounds put the lower slot at home, even rounds swap.
/// 4. Pairings against the bye are dropped.
/// 5. With `double`, the mirrored second leg follows with rounds offset by `n - 1`.
pub fn generate_round_robin(
    team_ids: &[TeamId],
    double: bool,
) -> Result<Vec<ScheduledPairing>, LeagueError> {
    if team_ids.len() < 2 {
        return Err(LeagueError::InsufficientTeams {
            count: team_ids.len(),
        });
    }

    // None is the bye.
    let mut slots: Vec<Option<&TeamId>> = team_ids.iter().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();
    let rotating = n - 1;

    let mut first_leg = Vec::with_capacity(n / 2 * rotating);
    for r in 0..rotating {
        let round = (r + 1) as u32;
        let at = |k: usize| {
            if k == 0 {
                slots[0]
            } else {
                slots[1 + (k - 1 + rotating - r) % rotating]
            }
        };
        for i in 0..n / 2 {
            let (first, second) = match (at(i), at(n - 1 - i)) {
                (Some(a), Some(b)) => (a, b),
                _ => continue,
            };
            let (home, away) = if round % 2 == 1 {
                (first, second)
            } else {
                (second, first)
            };
            first_leg.push(ScheduledPairing {
                round,
                home: home.clone(),
                away: away.clone(),
            });
        }
    }

    log::debug!(
        "Round-robin: {} teams, {} rounds, {} pairings per leg",
        team_ids.len(),
        rotating,
        first_leg.len()
    );

    if !double {
        return Ok(first_leg);
    }
    let offset = rotating as u32;
    let second_leg: Vec<ScheduledPairing> = first_leg
        .iter()
        .map(|p| ScheduledPairing {
            round: p.round + offset,
            home: p.away.clone(),
            away: p.home.clone(),
        })
        .collect();
    first_leg.extend(second_leg);
    Ok(first_leg)
}

/// Round-robin as fixture records: match numbers restart at 1 in each round.
pub fn round_robin_fixtures(
    tournament_id: TournamentId,
    team_ids: &[TeamId],
    double: bool,
) -> Result<Vec<Fixture>, LeagueError> {
    let pairings = generate_round_robin(team_ids, double)?;
    let mut fixtures = Vec::with_capacity(pairings.len());
    let mut current_round = 0;
    let mut match_number = 0;
    for p in pairings {
        if p.round != current_round {
            current_round = p.round;
            match_number = 0;
        }
        match_number += 1;
        fixtures.push(Fixture::new(
            tournament_id,
            p.round,
            match_number,
            p.home,
            p.away,
            FixtureSource::AutoGenerated,
        ));
    }
    Ok(fixtures)
}
