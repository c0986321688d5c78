//! Integration tests for the two-round fixture builder.

use league_engine::{build_two_round_fixtures, FixtureDraft, FixtureSource, LeagueError};
use uuid::Uuid;

fn pairs(f: &[league_engine::Fixture]) -> Vec<(u32, &str, &str)> {
    f.iter()
        .map(|x| {
            (
                x.match_number,
                x.home.as_deref().unwrap(),
                x.away.as_deref().unwrap(),
            )
        })
        .collect()
}

#[test]
fn round_two_mirrors_round_one() {
    let tid = Uuid::new_v4();
    let drafts = vec![FixtureDraft::new(1, "A", "B"), FixtureDraft::new(2, "C", "D")];
    let built = build_two_round_fixtures(tid, &drafts).unwrap();

    assert_eq!(pairs(&built.round1), vec![(1, "A", "B"), (2, "C", "D")]);
    assert_eq!(pairs(&built.round2), vec![(1, "B", "A"), (2, "D", "C")]);
    assert!(built.round1.iter().all(|f| f.round == 1 && f.source == FixtureSource::Manual));
    assert!(built
        .round2
        .iter()
        .all(|f| f.round == 2 && f.source == FixtureSource::AutoGenerated));
    assert!(built.round1.iter().chain(&built.round2).all(|f| f.tournament_id == tid && !f.is_bye));
}

#[test]
fn ids_are_trimmed() {
    let built = build_two_round_fixtures(Uuid::new_v4(), &[FixtureDraft::new(1, " A ", "B\t")]).unwrap();
    assert_eq!(pairs(&built.round1), vec![(1, "A", "B")]);
}

#[test]
fn rejects_blank_team() {
    let drafts = vec![FixtureDraft::new(1, "A", "B"), FixtureDraft::new(2, "C", "  ")];
    assert_eq!(
        build_two_round_fixtures(Uuid::new_v4(), &drafts),
        Err(LeagueError::IncompletePairing { match_number: 2 })
    );
}

#[test]
fn rejects_self_pairing() {
    let drafts = vec![FixtureDraft::new(1, "A", "B"), FixtureDraft::new(2, "C", "C")];
    assert_eq!(
        build_two_round_fixtures(Uuid::new_v4(), &drafts),
        Err(LeagueError::SelfPairing {
            match_number: 2,
            team: "C".to_string()
        })
    );
}

#[test]
fn blank_check_runs_before_self_pairing() {
    let drafts = vec![FixtureDraft::new(1, "A", "A"), FixtureDraft::new(2, "", "B")];
    assert!(matches!(
        build_two_round_fixtures(Uuid::new_v4(), &drafts),
        Err(LeagueError::IncompletePairing { match_number: 2 })
    ));
}

#[test]
fn rejects_team_used_twice_across_sides() {
    let drafts = vec![FixtureDraft::new(1, "A", "B"), FixtureDraft::new(2, "C", "A")];
    assert_eq!(
        build_two_round_fixtures(Uuid::new_v4(), &drafts),
        Err(LeagueError::DuplicateTeamUsage {
            match_number: 2,
            team: "A".to_string()
        })
    );
}

#[test]
fn rejects_repeated_match_number() {
    let drafts = vec![FixtureDraft::new(1, "A", "B"), FixtureDraft::new(1, "C", "D")];
    assert_eq!(
        build_two_round_fixtures(Uuid::new_v4(), &drafts),
        Err(LeagueError::DuplicateMatchNumber { match_number: 1 })
    );
}

#[test]
fn empty_submission_builds_nothing() {
    let built = build_two_round_fixtures(Uuid::new_v4(), &[]).unwrap();
    assert!(built.round1.is_empty());
    assert!(built.into_fixtures().is_empty());
}
