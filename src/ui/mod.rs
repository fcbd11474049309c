// UI Module
// Interactive text menu

pub mod menu;

pub use menu::{run_menu, Command};
