//! Headless UI controllers
//!
//! Button handlers and panel visibility for the main menu and the pause
//! panel. Rendering is left to the host.

pub mod menu;
pub mod pause;

pub use menu::MenuController;
pub use pause::PausePanel;
