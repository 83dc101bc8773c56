pub mod detail;
pub mod form;
pub mod list;

pub use detail::{PlayerDetail, NO_TEAMMATES, UNASSIGNED_TEAM};
pub use form::{team_options, FormError, NewPlayerDraft, TeamOption, TeamSelection, NO_TEAM};
pub use list::{ListView, PlayerCard, EMPTY_ROSTER_MESSAGE};
