use crate::domain::Roster;
use crate::view::PlayerDetail;

/// Outcome of executing a [`RosterCommand`](super::RosterCommand)
#[derive(Debug, Clone, PartialEq)]
pub enum RosterEvent {
    /// Players and teams were (re-)fetched
    RosterLoaded(Roster),

    /// A single player was fetched for the detail view
    PlayerLoaded(PlayerDetail),

    /// Back to the list, nothing fetched
    ListShown,

    /// Command failed
    CommandFailed { command: String, reason: String },
}

impl RosterEvent {
    pub fn failed(command: &str, reason: impl ToString) -> Self {
        RosterEvent::CommandFailed {
            command: command.to_string(),
            reason: reason.to_string(),
        }
    }
}
