//! Main menu

use crate::persistence::SaveStore;
use crate::platform::Clock;
use crate::scene::{LaunchMode, SceneNavigator};

/// Main menu state: continue button and settings panel visibility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuController {
    continue_visible: bool,
    settings_visible: bool,
}

impl MenuController {
    /// Set up the menu. Continue is only offered when a save exists, the
    /// settings panel starts hidden and gameplay time runs normally.
    pub fn open(saves: &SaveStore, clock: &mut Clock) -> Self {
        clock.set_time_scale(1.0);
        Self {
            continue_visible: saves.has_save(),
            settings_visible: false,
        }
    }

    pub fn continue_visible(&self) -> bool {
        self.continue_visible
    }

    pub fn settings_visible(&self) -> bool {
        self.settings_visible
    }

    pub fn on_continue_click(&self, nav: &mut SceneNavigator) {
        nav.start_game(LaunchMode::Continue);
    }

    pub fn on_new_game_click(&self, nav: &mut SceneNavigator) {
        nav.start_game(LaunchMode::NewGame);
    }

    pub fn on_settings_click(&mut self) {
        self.toggle_settings_panel();
    }

    pub fn on_quit_click(&self, nav: &mut SceneNavigator) {
        nav.exit_app();
    }

    pub fn toggle_settings_panel(&mut self) {
        self.settings_visible = !self.settings_visible;
        log::debug!("Settings panel visible: {}", self.settings_visible);
    }
}
