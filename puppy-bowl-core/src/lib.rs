//! # Puppy Bowl Core
//!
//! Roster domain, REST envelope decoding, the API client seam and the
//! command/event service the front end drives.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod view;

pub use api::{ApiError, RosterApi};
pub use application::{RosterCommand, RosterEvent, RosterModel, RosterService, ViewState};
pub use config::ApiConfig;
pub use domain::{NewPlayer, Player, PlayerId, PlayerStatus, PlayerWithTeam, Roster, Team, TeamId};
pub use view::{
    FormError, ListView, NewPlayerDraft, PlayerCard, PlayerDetail, TeamOption, TeamSelection,
};
