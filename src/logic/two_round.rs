//! Two-round format: a manually entered first round and its mirrored return round.

use crate::models::{Fixture, FixtureDraft, FixtureSource, LeagueError, TournamentId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Round numbers of the two-round format.
pub const FIRST_ROUND: u32 = 1;
pub const RETURN_ROUND: u32 = 2;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TwoRoundFixtures {
    pub round1: Vec<Fixture>,
    pub round2: Vec<Fixture>,
}

impl TwoRoundFixtures {
    /// Round 1 followed by round 2, the order fixtures are stored in.
    pub fn into_fixtures(self) -> Vec<Fixture> {
        let mut all = self.round1;
        all.extend(self.round2);
        all
    }
}

/// Validate round-1 drafts and derive round 2 by swapping home and away.
///
/// Checks run in passes over all drafts: blanks, then self-pairings, then teams used
/// twice, then repeated match numbers. Round 1 must be a perfect matching of the teams
/// it names. The result is meant to replace every stored fixture of the tournament.
pub fn build_two_round_fixtures(
    tournament_id: TournamentId,
    drafts: &[FixtureDraft],
) -> Result<TwoRoundFixtures, LeagueError> {
    let drafts: Vec<FixtureDraft> = drafts
        .iter()
        .map(|d| FixtureDraft::new(d.match_number, d.home.trim(), d.away.trim()))
        .collect();

    if let Some(d) = drafts.iter().find(|d| d.home.is_empty() || d.away.is_empty()) {
        return Err(LeagueError::IncompletePairing {
            match_number: d.match_number,
        });
    }

    if let Some(d) = drafts.iter().find(|d| d.home == d.away) {
        return Err(LeagueError::SelfPairing {
            match_number: d.match_number,
            team: d.home.clone(),
        });
    }

    let mut used = HashSet::new();
    for d in &drafts {
        for team in [&d.home, &d.away] {
            if !used.insert(team.as_str()) {
                return Err(LeagueError::DuplicateTeamUsage {
                    match_number: d.match_number,
                    team: team.clone(),
                });
            }
        }
    }

    let mut numbers = HashSet::new();
    if let Some(d) = drafts.iter().find(|d| !numbers.insert(d.match_number)) {
        return Err(LeagueError::DuplicateMatchNumber {
            match_number: d.match_number,
        });
    }

    let round1: Vec<Fixture> = drafts
        .into_iter()
        .map(|d| {
            Fixture::new(
                tournament_id,
                FIRST_ROUND,
                d.match_number,
                d.home,
                d.away,
                FixtureSource::Manual,
            )
        })
        .collect();
    let round2 = round1
        .iter()
        .map(|f| f.mirrored(RETURN_ROUND, FixtureSource::AutoGenerated))
        .collect();

    log::debug!("Two-round fixtures built: {} pairing(s) per round", round1.len());
    Ok(TwoRoundFixtures { round1, round2 })
}
