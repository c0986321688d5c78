//! StandingRow: one derived line of the league table.

use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// Points for a win. A draw is worth one, a loss nothing.
pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team_id: TeamId,
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    /// Summed over many matches, so wider than a single score.
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingRow {
    /// All-zero row for a team.
    pub fn for_team(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            name: team.name.clone(),
            ..Self::default()
        }
    }

    /// Count one played match from this team's point of view.
    pub fn add_result(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        self.goal_difference += i64::from(scored) - i64::from(conceded);
        if scored > conceded {
            self.wins += 1;
            self.points += POINTS_FOR_WIN;
        } else if scored == conceded {
            self.draws += 1;
            self.points += POINTS_FOR_DRAW;
        } else {
            self.losses += 1;
        }
    }
}
