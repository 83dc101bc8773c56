use crate::application::{RosterCommand, RosterEvent};
use crate::domain::Roster;
use crate::view::{ListView, PlayerDetail};

/// Which screen the main area shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    List,
    Detail(PlayerDetail),
}

/// Everything the UI renders from
///
/// Owned by the front end and updated only through [`begin`](Self::begin)
/// and [`apply`](Self::apply).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterModel {
    roster: Roster,
    view: ViewState,
    pending: bool,
    /// A `ShowPlayer` is outstanding and has not been superseded by `ShowList`
    awaiting_detail: bool,
    last_error: Option<String>,
}

impl RosterModel {
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// A remote command is in flight; mutating controls should be disabled
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn list_view(&self) -> ListView {
        ListView::from_roster(&self.roster)
    }

    /// Mark `command` as started
    pub fn begin(&mut self, command: &RosterCommand) {
        self.last_error = None;
        if command.is_remote() {
            self.pending = true;
        }
        match command {
            RosterCommand::ShowPlayer(_) => self.awaiting_detail = true,
            RosterCommand::ShowList => self.awaiting_detail = false,
            _ => {}
        }
    }

    /// Fold the outcome of a command into the model
    ///
    /// Only the completion of a remote command clears `pending`; going back to
    /// the list while a request is in flight leaves it set.
    pub fn apply(&mut self, event: RosterEvent) {
        match event {
            RosterEvent::RosterLoaded(roster) => {
                self.pending = false;
                self.roster = roster;
                self.view = ViewState::List;
            }
            RosterEvent::PlayerLoaded(detail) => {
                self.pending = false;
                if std::mem::take(&mut self.awaiting_detail) {
                    self.view = ViewState::Detail(detail);
                } else {
                    tracing::debug!("Dropping details of player #{} after Back", detail.id);
                }
            }
            RosterEvent::ListShown => {
                self.view = ViewState::List;
            }
            RosterEvent::CommandFailed { command, reason } => {
                self.pending = false;
                self.awaiting_detail = false;
                self.last_error = Some(format!("{command}: {reason}"));
            }
        }
    }
}
