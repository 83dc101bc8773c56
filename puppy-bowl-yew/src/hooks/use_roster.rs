use puppy_bowl_core::{RosterCommand, RosterModel};
use std::rc::Rc;
use yew::prelude::*;

/// Roster state accessible via hook
#[derive(Clone, PartialEq)]
pub struct RosterContext {
    pub model: Rc<RosterModel>,

    /// Send commands to the roster service
    pub send_command: Callback<RosterCommand>,
}

/// Hook to access roster state
///
/// # Example
///
/// ```rust,ignore
/// use puppy_bowl_yew::use_roster;
/// use puppy_bowl_core::RosterCommand;
///
/// let roster = use_roster();
///
/// // Open the detail card of player #1
/// roster.send_command.emit(RosterCommand::ShowPlayer(1));
/// ```
#[hook]
pub fn use_roster() -> RosterContext {
    use_context::<RosterContext>().expect("use_roster must be used within a RosterProvider")
}
