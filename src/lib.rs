//! Game Menu - headless menu scaffold for a small arcade game
//!
//! Core modules:
//! - `settings`: Persistent settings in the preference store
//! - `persistence`: Single-slot JSON save/load
//! - `platform`: Data directory, preference storage, time scale
//! - `scene`: Scene navigation
//! - `ui`: Main menu and pause panel controllers
//! - `game`: Live gameplay counters
//! - `app`: Process-wide context tying the above together

pub mod app;
pub mod command;
pub mod error;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod scene;
pub mod settings;
pub mod ui;

pub use app::{App, Flow, Screen};
pub use command::Command;
pub use error::{CommandError, PersistError};
pub use game::GameSession;
pub use persistence::{GameState, SaveStore};
pub use platform::{Clock, FilePreferences, MemoryPreferences, PreferenceStore};
pub use scene::{LaunchMode, Scene, SceneNavigator};
pub use settings::{Settings, SettingsStore};
