use crate::domain::{Player, PlayerId, Roster};

/// Shown instead of cards when the roster is empty
pub const EMPTY_ROSTER_MESSAGE: &str = "No players available to display.";

/// Summary card for one player in the list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    pub id: PlayerId,
    pub name: String,
    pub image_url: String,
    pub image_alt: String,
}

impl From<&Player> for PlayerCard {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            image_url: player.image_url.clone(),
            image_alt: player.name.clone(),
        }
    }
}

/// What the main area shows for the whole roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty { message: &'static str },
    Cards(Vec<PlayerCard>),
}

impl ListView {
    pub fn from_roster(roster: &Roster) -> Self {
        if roster.is_empty() {
            return ListView::Empty {
                message: EMPTY_ROSTER_MESSAGE,
            };
        }
        ListView::Cards(roster.players().iter().map(PlayerCard::from).collect())
    }
}
