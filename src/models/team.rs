//! Team and TournamentTeam, plus CSV roster import.

use crate::models::tournament::{LeagueError, TournamentId};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Caller-supplied team identifier (kept as text so manual pairings can be checked for blanks).
pub type TeamId = String;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Registration of a team in one tournament's pool.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct TournamentTeam {
    pub tournament_id: TournamentId,
    pub team_id: TeamId,
}

/// Read teams from CSV with an `id,name` header. Blank rows are skipped; ids and names are trimmed.
pub fn read_teams_csv<R: Read>(reader: R) -> Result<Vec<Team>, LeagueError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut teams = Vec::new();
    for record in rdr.deserialize::<Team>() {
        let team = record.map_err(|e| LeagueError::Csv(e.to_string()))?;
        if team.id.is_empty() && team.name.is_empty() {
            continue;
        }
        teams.push(team);
    }
    Ok(teams)
}
