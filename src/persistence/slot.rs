//! Single-slot save file

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::state::GameState;
use crate::error::PersistError;

/// Save file name inside the data directory
pub const SAVE_FILE_NAME: &str = "gamesave.json";

/// Single save slot stored as `<data_dir>/gamesave.json`.
///
/// Every call touches the file directly; nothing is cached. Calls are
/// blocking and not synchronized: callers must not use the same data
/// directory from several threads at once.
#[derive(Debug, Clone)]
pub struct SaveStore {
    data_dir: PathBuf,
}

impl SaveStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the save file
    pub fn save_path(&self) -> PathBuf {
        self.data_dir.join(SAVE_FILE_NAME)
    }

    /// Whether a save file exists
    pub fn has_save(&self) -> bool {
        self.save_path().exists()
    }

    /// Write `state` to the slot, replacing any previous save.
    /// Failures are logged and not reported to the caller.
    pub fn save(&self, state: &GameState) {
        if let Err(e) = self.try_save(state) {
            log::error!("Failed to save game: {}", e);
        }
    }

    /// Write `state` to the slot, replacing any previous save.
    /// A non-finite difficulty is rejected before the file is touched.
    pub fn try_save(&self, state: &GameState) -> Result<(), PersistError> {
        if !state.difficulty.is_finite() {
            return Err(PersistError::NonFinite {
                field: "difficulty",
                value: state.difficulty,
            });
        }
        let path = self.save_path();
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&path, json).map_err(|e| PersistError::io(&path, e))?;
        log::info!("Game state saved to {}", path.display());
        Ok(())
    }

    /// Read the saved state. A missing, unreadable or malformed save all
    /// come back as `None`; the cause is logged.
    pub fn load(&self) -> Option<GameState> {
        match self.try_load() {
            Ok(Some(state)) => Some(state),
            Ok(None) => {
                log::warn!("No save file found at {}", self.save_path().display());
                None
            }
            Err(e) => {
                log::error!("Failed to load game state: {}", e);
                None
            }
        }
    }

    /// Read the saved state; `Ok(None)` when there is no save
    pub fn try_load(&self) -> Result<Option<GameState>, PersistError> {
        let path = self.save_path();
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path).map_err(|e| PersistError::io(&path, e))?;
        let state = serde_json::from_str(&json).map_err(|e| PersistError::json(&path, e))?;
        log::info!("Loaded game state from {}", path.display());
        Ok(Some(state))
    }

    /// Remove the save file. Deleting a missing save is not an error.
    pub fn delete(&self) -> Result<(), PersistError> {
        let path = self.save_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                log::info!("Saved game cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistError::io(&path, e)),
        }
    }
}
