pub mod player;
pub mod roster;
pub mod team;

pub use player::{NewPlayer, Player, PlayerId, PlayerStatus, PlayerWithTeam};
pub use roster::Roster;
pub use team::{Team, TeamId};
