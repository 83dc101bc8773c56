use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Team, TeamId};

/// Player identifier as assigned by the API
pub type PlayerId = i64;

/// Where a player currently is during the bowl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    /// Waiting on the sidelines (new players start here)
    #[default]
    Bench,
    /// Currently playing
    Field,
    /// Any status this client does not know about
    #[serde(other)]
    Unknown,
}

impl PlayerStatus {
    /// Statuses a user can pick when adding a player
    pub const SELECTABLE: [PlayerStatus; 2] = [PlayerStatus::Bench, PlayerStatus::Field];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Bench => "bench",
            PlayerStatus::Field => "field",
            PlayerStatus::Unknown => "unknown",
        }
    }

    /// Parse a form value; anything unrecognised falls back to the bench
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "field" => PlayerStatus::Field,
            _ => PlayerStatus::Bench,
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A roster entry as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    pub image_url: String,
    #[serde(default)]
    pub status: PlayerStatus,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Player {
    pub fn has_team(&self) -> bool {
        self.team_id.is_some()
    }
}

/// Single-player response: the player plus its embedded team, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerWithTeam {
    #[serde(flatten)]
    pub player: Player,
    #[serde(default)]
    pub team: Option<Team>,
}

/// Create payload sent to `POST /players`
///
/// `teamId` is left out of the JSON entirely when the player has no team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    pub image_url: String,
    pub status: PlayerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
}
