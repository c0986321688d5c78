//! Integration tests for the league table.

use chrono::Utc;
use league_engine::{compute_standings, write_standings_csv, GameMatch, StandingRow, Team};
use uuid::Uuid;

fn pool(ids: &[&str]) -> Vec<Team> {
    ids.iter().map(|id| Team::new(*id, format!("Team {id}"))).collect()
}

fn played(home: &str, away: &str, h: u32, a: u32) -> GameMatch {
    GameMatch::new(Uuid::nil(), 1, home.to_string(), away.to_string()).with_score(h, a, Utc::now())
}

fn unplayed(home: &str, away: &str) -> GameMatch {
    GameMatch::new(Uuid::nil(), 1, home.to_string(), away.to_string())
}

fn row<'a>(rows: &'a [StandingRow], id: &str) -> &'a StandingRow {
    rows.iter().find(|r| r.team_id == id).unwrap()
}

#[test]
fn scenario_from_three_matches() {
    let teams = pool(&["A", "B", "C"]);
    let matches = vec![played("A", "B", 2, 1), played("A", "C", 0, 0), unplayed("B", "C")];
    let rows = compute_standings(&teams, &matches);

    let a = row(&rows, "A");
    assert_eq!((a.played, a.wins, a.draws, a.losses, a.points, a.goal_difference), (2, 1, 1, 0, 4, 1));
    let b = row(&rows, "B");
    assert_eq!((b.played, b.wins, b.draws, b.losses, b.points, b.goal_difference), (1, 0, 0, 1, 0, -1));
    let c = row(&rows, "C");
    assert_eq!((c.played, c.draws, c.points, c.goal_difference), (1, 1, 1, 0));

    let order: Vec<&str> = rows.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(order, vec!["A", "C", "B"]);
}

#[test]
fn teams_without_matches_appear_as_zero_rows() {
    let rows = compute_standings(&pool(&["A", "B"]), &[]);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.played == 0 && r.points == 0));
    assert_eq!(rows[0].name, "Team A");
}

#[test]
fn incomplete_matches_are_skipped() {
    let mut half_scored = unplayed("A", "B");
    half_scored.home_score = Some(3);
    let mut no_away = played("A", "B", 1, 0);
    no_away.away_team = None;
    let outsider = played("A", "Z", 5, 0);

    let rows = compute_standings(&pool(&["A", "B"]), &[half_scored, no_away, outsider]);
    assert!(rows.iter().all(|r| r.played == 0));
}

#[test]
fn ordering_uses_points_then_difference_then_goals_for() {
    let teams = pool(&["A", "B", "C", "D"]);
    // A and B: 3 points, gd +1; B scored more. C: 3 points, gd +3. D: 0.
    let matches = vec![
        played("A", "D", 1, 0),
        played("B", "D", 3, 2),
        played("C", "D", 3, 0),
    ];
    let rows = compute_standings(&teams, &matches);
    let order: Vec<&str> = rows.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(order, vec!["C", "B", "A", "D"]);
}

#[test]
fn full_ties_keep_pool_order() {
    let teams = pool(&["D", "C", "B", "A"]);
    let matches = vec![played("D", "C", 1, 1), played("B", "A", 1, 1)];
    let rows = compute_standings(&teams, &matches);
    let order: Vec<&str> = rows.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(order, vec!["D", "C", "B", "A"]);
}

#[test]
fn played_and_points_are_conserved() {
    let teams = pool(&["A", "B", "C", "D"]);
    let matches = vec![
        played("A", "B", 2, 0),
        played("C", "D", 1, 1),
        played("A", "C", 0, 3),
        played("B", "D", 2, 2),
        unplayed("A", "D"),
    ];
    let rows = compute_standings(&teams, &matches);
    let total_played: u32 = rows.iter().map(|r| r.played).sum();
    assert_eq!(total_played, 2 * 4);
    // Two decisive (3 each) and two draws (2 each).
    let total_points: u32 = rows.iter().map(|r| r.points).sum();
    assert_eq!(total_points, 3 * 2 + 2 * 2);
    for r in &rows {
        assert_eq!(r.goal_difference, r.goals_for as i64 - r.goals_against as i64);
        assert_eq!(r.points, 3 * r.wins + r.draws);
    }
}

#[test]
fn large_scores_accumulate_without_wrapping() {
    let teams = pool(&["A", "B"]);
    let big = 3_000_000_000;
    let matches = vec![played("A", "B", big, 0), played("B", "A", big, 0)];
    let rows = compute_standings(&teams, &matches);
    for r in &rows {
        assert_eq!(r.goals_for, 3_000_000_000);
        assert_eq!(r.goals_against, 3_000_000_000);
        assert_eq!(r.goal_difference, 0);
        assert_eq!(r.points, 3);
    }

    let one_sided = compute_standings(
        &teams,
        &[played("A", "B", u32::MAX, 0), played("A", "B", u32::MAX, 0)],
    );
    let a = row(&one_sided, "A");
    assert_eq!(a.goals_for, 2 * u64::from(u32::MAX));
    assert_eq!(a.goal_difference, 2 * i64::from(u32::MAX));
    assert_eq!(row(&one_sided, "B").goal_difference, -2 * i64::from(u32::MAX));
}

#[test]
fn csv_export_has_header_and_rows() {
    let rows = compute_standings(&pool(&["A", "B"]), &[played("A", "B", 2, 1)]);
    let mut buf = Vec::new();
    write_standings_csv(&rows, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("team_id,name,played,wins,draws,losses,goals_for,goals_against,goal_difference,points")
    );
    assert_eq!(lines.next(), Some("A,Team A,1,1,0,0,2,1,1,3"));
    assert_eq!(lines.next(), Some("B,Team B,1,0,0,1,1,2,-1,0"));
}
