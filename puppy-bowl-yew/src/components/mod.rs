//! UI components for the roster

mod error_banner;
mod new_player_form;
mod player_card;
mod player_detail;
mod player_list;
pub use error_banner::ErrorBanner;
pub use new_player_form::NewPlayerForm;
pub use player_card::PlayerCardComp;
pub use player_detail::PlayerDetailComp;
pub use player_list::PlayerList;
