//! Player, Role and DrawAssignment data structures.

use crate::models::team::TeamId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};

/// What a roster member may do in the league. Only `Player` entries take part in the draw.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    Player,
}

/// A league member, identified by email.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

impl Player {
    /// Create a player with role `Player`.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_role(email, name, Role::Player)
    }

    pub fn with_role(email: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            role,
        }
    }

    pub fn is_player(&self) -> bool {
        self.role == Role::Player
    }

    /// Case-insensitive identity comparison.
    pub fn same_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}

/// One player drawn to one team within a tournament.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct DrawAssignment {
    pub tournament_id: TournamentId,
    pub player_email: String,
    pub team_id: TeamId,
}

/// Email of the player drawn to `team`, if any.
pub fn assigned_player(assignments: &[DrawAssignment], team: Option<&str>) -> Option<String> {
    let team = team?;
    assignments
        .iter()
        .find(|a| a.team_id == team)
        .map(|a| a.player_email.clone())
}
