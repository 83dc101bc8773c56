use crate::domain::{NewPlayer, PlayerId};

/// Commands the UI can issue against the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterCommand {
    /// Fetch players and teams (app start)
    Refresh,

    /// Create a player, then re-fetch everything
    AddPlayer(NewPlayer),

    /// Delete a player, then re-fetch everything
    RemovePlayer(PlayerId),

    /// Fetch a single player and show its detail card
    ShowPlayer(PlayerId),

    /// Go back to the list without fetching
    ShowList,
}

impl RosterCommand {
    pub fn name(&self) -> &'static str {
        match self {
            RosterCommand::Refresh => "Refresh",
            RosterCommand::AddPlayer(_) => "AddPlayer",
            RosterCommand::RemovePlayer(_) => "RemovePlayer",
            RosterCommand::ShowPlayer(_) => "ShowPlayer",
            RosterCommand::ShowList => "ShowList",
        }
    }

    /// Whether executing this command touches the network
    pub fn is_remote(&self) -> bool {
        !matches!(self, RosterCommand::ShowList)
    }
}
