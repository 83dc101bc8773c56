//! # Puppy Bowl Yew
//!
//! Browser front end for the Puppy Bowl roster: an HTTP client for the
//! roster API, a provider that drives the core controller, and the
//! components that render the list, detail and add-player form.

pub mod api;
pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod providers;

// Re-exports for convenience
pub use api::HttpRosterApi;
pub use app::App;
pub use components::{ErrorBanner, NewPlayerForm, PlayerCardComp, PlayerDetailComp, PlayerList};
pub use hooks::{use_roster, RosterContext};
pub use pages::RosterScreen;
pub use providers::{RosterProvider, RosterProviderProps};
