use crate::domain::{NewPlayer, PlayerStatus, Team, TeamId};

/// Value of the team select meaning "no team"
pub const NO_TEAM: &str = "none";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid team selection: {0}")]
    InvalidTeam(String),
}

/// Team chosen in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSelection {
    None,
    Team(TeamId),
}

impl TeamSelection {
    pub fn parse(value: &str) -> Result<Self, FormError> {
        let value = value.trim();
        if value.is_empty() || value == NO_TEAM {
            return Ok(TeamSelection::None);
        }
        value
            .parse::<TeamId>()
            .map(TeamSelection::Team)
            .map_err(|_| FormError::InvalidTeam(value.to_string()))
    }

    pub fn team_id(&self) -> Option<TeamId> {
        match self {
            TeamSelection::None => None,
            TeamSelection::Team(id) => Some(*id),
        }
    }
}

/// One `<option>` of the team select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamOption {
    pub value: String,
    pub label: String,
}

/// The "none" sentinel followed by one option per fetched team
pub fn team_options(teams: &[Team]) -> Vec<TeamOption> {
    std::iter::once(TeamOption {
        value: NO_TEAM.to_string(),
        label: "None".to_string(),
    })
    .chain(teams.iter().map(|team| TeamOption {
        value: team.id.to_string(),
        label: team.name.clone(),
    }))
    .collect()
}

/// Current contents of the add-player form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayerDraft {
    pub name: String,
    pub breed: String,
    pub image_url: String,
    pub status: PlayerStatus,
    /// Raw value of the team select
    pub team: String,
}

impl Default for NewPlayerDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            breed: String::new(),
            image_url: String::new(),
            status: PlayerStatus::Bench,
            team: NO_TEAM.to_string(),
        }
    }
}

impl NewPlayerDraft {
    /// Validate the draft and build the create payload
    pub fn to_new_player(&self) -> Result<NewPlayer, FormError> {
        let name = required("Name", &self.name)?;
        let breed = required("Breed", &self.breed)?;
        let image_url = required("Image URL", &self.image_url)?;
        let team = TeamSelection::parse(&self.team)?;

        Ok(NewPlayer {
            name,
            breed,
            image_url,
            status: self.status,
            team_id: team.team_id(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(value.to_string())
}
