//! Scene navigation
//!
//! Central place for every scene transition and for quitting.

/// Scenes of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Initial scene, left as soon as the app has booted
    Boot,
    Menu,
    Game,
}

impl Scene {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scene::Boot => "Boot",
            Scene::Menu => "Menu",
            Scene::Game => "Game",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "boot" => Some(Scene::Boot),
            "menu" => Some(Scene::Menu),
            "game" => Some(Scene::Game),
            _ => None,
        }
    }
}

/// How the game scene should start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Fresh counters
    NewGame,
    /// Restore counters from the save slot
    Continue,
}

/// Tracks the active scene and pending exit
#[derive(Debug, Clone)]
pub struct SceneNavigator {
    current: Scene,
    launch_mode: Option<LaunchMode>,
    exit_requested: bool,
}

impl Default for SceneNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneNavigator {
    pub fn new() -> Self {
        Self {
            current: Scene::Boot,
            launch_mode: None,
            exit_requested: false,
        }
    }

    pub fn current(&self) -> Scene {
        self.current
    }

    /// Launch mode of the most recent `start_game`
    pub fn launch_mode(&self) -> Option<LaunchMode> {
        self.launch_mode
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Load the main menu scene
    pub fn go_to_menu(&mut self) {
        self.load(Scene::Menu);
    }

    /// Load the game scene
    pub fn start_game(&mut self, mode: LaunchMode) {
        self.launch_mode = Some(mode);
        self.load(Scene::Game);
    }

    /// Request application exit; the host loop stops on its next check
    pub fn exit_app(&mut self) {
        log::info!("Exit requested");
        self.exit_requested = true;
    }

    fn load(&mut self, scene: Scene) {
        log::info!("Loading scene {} (from {})", scene.as_str(), self.current.as_str());
        self.current = scene;
    }
}
