//! Pause panel shown over the game scene

use crate::game::GameSession;
use crate::persistence::SaveStore;
use crate::platform::Clock;
use crate::scene::SceneNavigator;

/// Pause panel: freezes gameplay time while visible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PausePanel {
    visible: bool,
}

impl PausePanel {
    /// The panel always starts hidden
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the panel and freeze gameplay time
    pub fn open(&mut self, clock: &mut Clock) {
        self.visible = true;
        clock.set_time_scale(0.0);
    }

    /// Hide the panel and resume gameplay time
    pub fn close(&mut self, clock: &mut Clock) {
        self.visible = false;
        clock.set_time_scale(1.0);
    }

    pub fn on_return_to_game_click(&mut self, clock: &mut Clock) {
        self.close(clock);
    }

    /// Write the running session to the save slot
    pub fn on_save_game_click(&self, session: Option<&GameSession>, saves: &SaveStore) {
        match session {
            Some(session) => {
                saves.save(&session.snapshot());
            }
            None => log::warn!("Cannot save: no running game session"),
        }
    }

    /// Leave for the menu; time is unfrozen first
    pub fn on_return_to_menu_click(&mut self, clock: &mut Clock, nav: &mut SceneNavigator) {
        self.visible = false;
        clock.set_time_scale(1.0);
        nav.go_to_menu();
    }

    pub fn on_quit_game_click(&self, nav: &mut SceneNavigator) {
        nav.exit_app();
    }
}
