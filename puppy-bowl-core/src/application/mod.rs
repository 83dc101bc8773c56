mod commands;
mod events;
mod model;
mod service;

pub use commands::RosterCommand;
pub use events::RosterEvent;
pub use model::{RosterModel, ViewState};
pub use service::RosterService;
