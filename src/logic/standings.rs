//! League table from recorded results.

use crate::models::{GameMatch, LeagueError, StandingRow, Team};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::Write;

/// Build the league table for `team_pool` from `matches`.
///
/// Every pool team gets a row, played or not. A match counts only when both teams and
/// both scores are present and both teams belong to the pool; anything else is skipped.
/// Rows are ordered by points, goal difference, then goals for (all descending). The sort
/// is stable, so full ties keep the pool order.
pub fn compute_standings(team_pool: &[Team], matches: &[GameMatch]) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = team_pool.iter().map(StandingRow::for_team).collect();
    let index: HashMap<&str, usize> = team_pool
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id.as_str(), i))
        .collect();

    let mut counted = 0;
    for m in matches {
        let (Some(home), Some(away), Some(home_score), Some(away_score)) = (
            m.home_team.as_deref(),
            m.away_team.as_deref(),
            m.home_score,
            m.away_score,
        ) else {
            continue;
        };
        let (Some(&h), Some(&a)) = (index.get(home), index.get(away)) else {
            continue;
        };
        rows[h].add_result(home_score, away_score);
        rows[a].add_result(away_score, home_score);
        counted += 1;
    }

    rows.sort_by(compare_rows);
    log::debug!(
        "Standings: {} team(s), {} of {} match(es) counted",
        rows.len(),
        counted,
        matches.len()
    );
    rows
}

fn compare_rows(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Write the table as CSV with a header row, in the given order.
pub fn write_standings_csv<W: Write>(rows: &[StandingRow], writer: W) -> Result<(), LeagueError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row).map_err(|e| LeagueError::Csv(e.to_string()))?;
    }
    wtr.flush().map_err(|e| LeagueError::Csv(e.to_string()))
}
