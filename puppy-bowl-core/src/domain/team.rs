use serde::{Deserialize, Serialize};

use super::Player;

/// Team identifier as assigned by the API
pub type TeamId = i64;

/// A team and its current players (read-only from this client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    /// Names of every player on the team, in API order
    pub fn player_names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }
}
