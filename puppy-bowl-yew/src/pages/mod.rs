mod roster_screen;

pub use roster_screen::RosterScreen;
