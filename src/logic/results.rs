//! Recording and clearing match scores.

use crate::models::{GameMatch, LeagueError, Side};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Parse a score typed by a user: a non-negative integer, surrounding whitespace allowed.
pub fn parse_score(side: Side, raw: &str) -> Result<i64, LeagueError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|s| *s >= 0)
        .ok_or_else(|| LeagueError::InvalidScore {
            side,
            raw: raw.to_string(),
        })
}

/// Read a score from a JSON body: an integer number, or a string holding one.
pub fn score_from_json(side: Side, value: &Value) -> Result<i64, LeagueError> {
    match value {
        Value::Number(n) => {
            n.as_i64()
                .filter(|s| *s >= 0)
                .ok_or_else(|| LeagueError::InvalidScore {
                    side,
                    raw: n.to_string(),
                })
        }
        Value::String(s) => parse_score(side, s),
        other => Err(LeagueError::InvalidScore {
            side,
            raw: other.to_string(),
        }),
    }
}

fn checked_score(side: Side, score: i64) -> Result<u32, LeagueError> {
    u32::try_from(score).map_err(|_| LeagueError::InvalidScore {
        side,
        raw: score.to_string(),
    })
}

/// The match with both scores set and `played_at` stamped. Negative scores are rejected
/// and nothing changes.
pub fn record_result(
    game: &GameMatch,
    home_score: i64,
    away_score: i64,
    played_at: DateTime<Utc>,
) -> Result<GameMatch, LeagueError> {
    let home = checked_score(Side::Home, home_score)?;
    let away = checked_score(Side::Away, away_score)?;
    log::debug!("Result for match {}: {}-{}", game.id, home, away);
    Ok(game.clone().with_score(home, away, played_at))
}

/// The match back in the unplayed state: both scores and `played_at` cleared.
pub fn clear_result(game: &GameMatch) -> GameMatch {
    GameMatch {
        home_score: None,
        away_score: None,
        played_at: None,
        ..game.clone()
    }
}
