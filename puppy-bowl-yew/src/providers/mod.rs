mod roster_provider;

pub use roster_provider::{RosterProvider, RosterProviderProps};
