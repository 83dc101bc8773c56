use serde::{Deserialize, Serialize};

use super::{Player, PlayerId, Team, TeamId};

/// Last fetched players and teams
///
/// Always replaced wholesale after a successful fetch; order is the API's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    teams: Vec<Team>,
}

impl Roster {
    pub fn new(players: Vec<Player>, teams: Vec<Team>) -> Self {
        Self { players, teams }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.player(id).is_some()
    }
}
