//! Application context
//!
//! Owns everything that lives for the whole process (settings, save slot,
//! navigator, clock) and the controllers of the active scene. Created once
//! by the entry point via [`App::boot`].

use std::path::Path;

use crate::command::Command;
use crate::error::CommandError;
use crate::game::GameSession;
use crate::persistence::SaveStore;
use crate::platform::{Clock, PreferenceStore};
use crate::scene::{LaunchMode, Scene, SceneNavigator};
use crate::settings::SettingsStore;
use crate::ui::{MenuController, PausePanel};

/// Controllers of the active scene
#[derive(Debug, Clone)]
pub enum Screen {
    Boot,
    Menu(MenuController),
    Game {
        session: GameSession,
        pause: PausePanel,
    },
}

impl Screen {
    pub fn scene(&self) -> Scene {
        match self {
            Screen::Boot => Scene::Boot,
            Screen::Menu(_) => Scene::Menu,
            Screen::Game { .. } => Scene::Game,
        }
    }
}

/// Whether the host loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Running,
    Exit,
}

pub struct App<P: PreferenceStore> {
    settings: SettingsStore<P>,
    saves: SaveStore,
    navigator: SceneNavigator,
    clock: Clock,
    screen: Screen,
}

impl<P: PreferenceStore> App<P> {
    /// One-time startup: load settings, then leave the boot scene for the
    /// main menu.
    pub fn boot(data_dir: &Path, prefs: P) -> Self {
        log::info!("Booting from {}", data_dir.display());
        let mut app = Self {
            settings: SettingsStore::load(prefs),
            saves: SaveStore::new(data_dir),
            navigator: SceneNavigator::new(),
            clock: Clock::default(),
            screen: Screen::Boot,
        };
        app.navigator.go_to_menu();
        app.sync_screen();
        app
    }

    pub fn settings(&self) -> &SettingsStore<P> {
        &self.settings
    }

    pub fn saves(&self) -> &SaveStore {
        &self.saves
    }

    pub fn navigator(&self) -> &SceneNavigator {
        &self.navigator
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Apply one command and report whether to keep running
    pub fn execute(&mut self, command: Command) -> Result<Flow, CommandError> {
        let scene = self.screen.scene();
        let unavailable = || CommandError::Unavailable {
            command: command.name().to_string(),
            scene: scene.as_str().to_string(),
        };

        match command {
            Command::Status => {}
            Command::Volume(v) => self.settings.set_music_volume(v),
            Command::Particles(show) => self.settings.set_show_particles(show),
            _ => match &mut self.screen {
                Screen::Boot => return Err(unavailable()),
                Screen::Menu(menu) => match command {
                    Command::NewGame => menu.on_new_game_click(&mut self.navigator),
                    Command::Continue if menu.continue_visible() => {
                        menu.on_continue_click(&mut self.navigator)
                    }
                    Command::ToggleSettings => menu.on_settings_click(),
                    Command::Quit => menu.on_quit_click(&mut self.navigator),
                    _ => return Err(unavailable()),
                },
                Screen::Game { session, pause } => match command {
                    Command::Score(points) if !pause.is_visible() => session.add_score(points),
                    Command::Die if !pause.is_visible() => {
                        session.lose_life(&self.saves);
                        if session.is_over() {
                            self.navigator.go_to_menu();
                        }
                    }
                    Command::Pause if !pause.is_visible() => pause.open(&mut self.clock),
                    Command::Resume if pause.is_visible() => {
                        pause.on_return_to_game_click(&mut self.clock)
                    }
                    Command::Save if pause.is_visible() => {
                        pause.on_save_game_click(Some(&*session), &self.saves)
                    }
                    Command::Menu if pause.is_visible() => {
                        pause.on_return_to_menu_click(&mut self.clock, &mut self.navigator)
                    }
                    Command::Quit => pause.on_quit_game_click(&mut self.navigator),
                    _ => return Err(unavailable()),
                },
            },
        }

        self.sync_screen();
        if self.navigator.exit_requested() {
            Ok(Flow::Exit)
        } else {
            Ok(Flow::Running)
        }
    }

    /// Rebuild the scene controllers after a transition
    fn sync_screen(&mut self) {
        let scene = self.navigator.current();
        if self.screen.scene() == scene {
            return;
        }
        self.screen = match scene {
            Scene::Boot => Screen::Boot,
            Scene::Menu => Screen::Menu(MenuController::open(&self.saves, &mut self.clock)),
            Scene::Game => {
                let mode = self.navigator.launch_mode().unwrap_or(LaunchMode::NewGame);
                Screen::Game {
                    session: GameSession::start(mode, &self.saves),
                    pause: PausePanel::new(),
                }
            }
        };
    }

    /// Human-readable summary of the current state
    pub fn status(&self) -> String {
        let settings = self.settings.settings();
        let screen = match &self.screen {
            Screen::Boot => "Boot".to_string(),
            Screen::Menu(menu) => format!(
                "Menu (continue: {}, settings panel: {})",
                if menu.continue_visible() { "yes" } else { "no" },
                if menu.settings_visible() { "open" } else { "closed" },
            ),
            Screen::Game { session, pause } => format!(
                "Game (score {}, lives {}, spawn rate {:.2}{})",
                session.score,
                session.lives,
                session.spawn_rate,
                if pause.is_visible() { ", paused" } else { "" },
            ),
        };
        format!(
            "{} | volume {:.2} | particles {} | time scale {:.1}",
            screen,
            settings.music_volume,
            if settings.show_particles { "on" } else { "off" },
            self.clock.time_scale(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::GameState;
    use crate::platform::{FilePreferences, MemoryPreferences};
    use tempfile::tempdir;

    fn run(app: &mut App<MemoryPreferences>, line: &str) -> Result<Flow, CommandError> {
        app.execute(line.parse().unwrap())
    }

    #[test]
    fn test_boot_lands_on_menu() {
        let dir = tempdir().unwrap();
        let app = App::boot(dir.path(), MemoryPreferences::new());
        assert_eq!(app.navigator().current(), Scene::Menu);
        assert!(matches!(app.screen(), Screen::Menu(m) if !m.continue_visible()));
        assert_eq!(app.settings().music_volume(), 1.0);
    }

    #[test]
    fn test_continue_needs_save() {
        let dir = tempdir().unwrap();
        let mut app = App::boot(dir.path(), MemoryPreferences::new());
        assert!(matches!(
            run(&mut app, "continue"),
            Err(CommandError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_save_and_continue_flow() {
        let dir = tempdir().unwrap();
        let mut app = App::boot(dir.path(), MemoryPreferences::new());

        run(&mut app, "new").unwrap();
        assert_eq!(app.navigator().current(), Scene::Game);
        run(&mut app, "score 250").unwrap();

        // Saving is only offered from the pause panel
        assert!(run(&mut app, "save").is_err());
        run(&mut app, "pause").unwrap();
        assert!(app.clock().is_frozen());
        assert!(run(&mut app, "score 10").is_err());
        run(&mut app, "save").unwrap();
        run(&mut app, "menu").unwrap();

        assert_eq!(app.clock().time_scale(), 1.0);
        assert!(matches!(app.screen(), Screen::Menu(m) if m.continue_visible()));

        run(&mut app, "continue").unwrap();
        match app.screen() {
            Screen::Game { session, pause } => {
                assert_eq!(session.score, 250);
                assert_eq!(session.lives, 3);
                assert!(!pause.is_visible());
            }
            other => panic!("expected game screen, got {:?}", other),
        }
    }

    #[test]
    fn test_new_game_keeps_save() {
        let dir = tempdir().unwrap();
        let saves = SaveStore::new(dir.path());
        saves.save(&GameState {
            score: 9,
            lives: 1,
            difficulty: 1.0,
        });
        let mut app = App::boot(dir.path(), MemoryPreferences::new());
        run(&mut app, "new").unwrap();
        match app.screen() {
            Screen::Game { session, .. } => assert_eq!(session.score, 0),
            other => panic!("expected game screen, got {:?}", other),
        }
        assert!(app.saves().has_save());
    }

    #[test]
    fn test_game_over_returns_to_menu() {
        let dir = tempdir().unwrap();
        let mut app = App::boot(dir.path(), MemoryPreferences::new());
        run(&mut app, "new").unwrap();
        run(&mut app, "pause").unwrap();
        run(&mut app, "save").unwrap();
        run(&mut app, "resume").unwrap();

        for _ in 0..3 {
            run(&mut app, "die").unwrap();
        }
        assert_eq!(app.navigator().current(), Scene::Menu);
        assert!(!app.saves().has_save());
        assert!(matches!(app.screen(), Screen::Menu(m) if !m.continue_visible()));
    }

    #[test]
    fn test_continue_finished_run_starts_playable() {
        let dir = tempdir().unwrap();
        SaveStore::new(dir.path()).save(&GameState {
            score: 30,
            lives: 0,
            difficulty: 1.0,
        });
        let mut app = App::boot(dir.path(), MemoryPreferences::new());
        run(&mut app, "continue").unwrap();
        match app.screen() {
            Screen::Game { session, .. } => {
                assert!(!session.is_over());
                assert_eq!(session.lives, 3);
            }
            other => panic!("expected game screen, got {:?}", other),
        }

        run(&mut app, "die").unwrap();
        assert_eq!(app.navigator().current(), Scene::Game);
    }

    #[test]
    fn test_settings_anywhere() {
        let dir = tempdir().unwrap();
        let mut app = App::boot(dir.path(), MemoryPreferences::new());
        run(&mut app, "volume 0.4").unwrap();
        run(&mut app, "new").unwrap();
        run(&mut app, "particles off").unwrap();
        assert_eq!(app.settings().music_volume(), 0.4);
        assert!(!app.settings().show_particles());
    }

    #[test]
    fn test_quit_from_menu_and_game() {
        let dir = tempdir().unwrap();
        let mut app = App::boot(dir.path(), MemoryPreferences::new());
        assert_eq!(run(&mut app, "status"), Ok(Flow::Running));
        assert_eq!(run(&mut app, "quit"), Ok(Flow::Exit));

        let mut app = App::boot(dir.path(), MemoryPreferences::new());
        run(&mut app, "new").unwrap();
        assert_eq!(run(&mut app, "quit"), Ok(Flow::Exit));
    }

    #[test]
    fn test_settings_persist_across_boots() {
        let dir = tempdir().unwrap();
        {
            let mut app = App::boot(dir.path(), FilePreferences::in_dir(dir.path()));
            app.execute(Command::Volume(0.3)).unwrap();
        }
        let app = App::boot(dir.path(), FilePreferences::in_dir(dir.path()));
        assert_eq!(app.settings().music_volume(), 0.3);
        assert!(app.status().contains("volume 0.30"));
    }
}
