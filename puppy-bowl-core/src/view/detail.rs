use crate::domain::{Player, PlayerId, PlayerStatus, PlayerWithTeam, Roster, Team};

pub const UNASSIGNED_TEAM: &str = "Unassigned";
pub const NO_TEAMMATES: &str = "There are no teammates to display for this player.";

/// Detail card for a single player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDetail {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    pub image_url: String,
    pub status: PlayerStatus,
    pub team_name: Option<String>,
    pub teammates: Vec<String>,
}

impl PlayerDetail {
    /// Build the detail for `player`; `team` is ignored unless the player has a `teamId`
    pub fn new(player: &Player, team: Option<&Team>) -> Self {
        let team = team.filter(|_| player.has_team());

        Self {
            id: player.id,
            name: player.name.clone(),
            breed: player.breed.clone(),
            image_url: player.image_url.clone(),
            status: player.status,
            team_name: team.map(|t| t.name.clone()),
            teammates: team
                .map(|t| t.player_names().into_iter().map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }

    /// Resolve the team from the fetched player, falling back to the roster's teams
    pub fn resolve(fetched: &PlayerWithTeam, roster: &Roster) -> Self {
        let team = fetched.team.as_ref().or_else(|| {
            fetched
                .player
                .team_id
                .and_then(|team_id| roster.team(team_id))
        });
        Self::new(&fetched.player, team)
    }

    pub fn team_label(&self) -> &str {
        self.team_name.as_deref().unwrap_or(UNASSIGNED_TEAM)
    }

    pub fn teammates_text(&self) -> String {
        if self.teammates.is_empty() {
            NO_TEAMMATES.to_string()
        } else {
            self.teammates.join(", ")
        }
    }
}
