//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time scale (pause freezes gameplay time)
//! - Writable application data directory
//! - Storage (preference key-value store)

pub mod storage;
pub mod time;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PersistError;

pub use storage::{FilePreferences, MemoryPreferences, PrefValue, PreferenceStore};
pub use time::Clock;

/// Directory name under the platform data directory
pub const APP_DIR_NAME: &str = "game-menu";

/// Fallback when the platform exposes no data directory
const LOCAL_FALLBACK_DIR: &str = "game-menu-data";

/// Resolve the writable application data directory.
///
/// An explicit override (CLI flag or env var) wins; otherwise the platform
/// data directory is used, then a directory next to the working directory.
pub fn app_data_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    match dirs::data_dir() {
        Some(base) => base.join(APP_DIR_NAME),
        None => {
            log::warn!("No platform data directory, using ./{}", LOCAL_FALLBACK_DIR);
            PathBuf::from(LOCAL_FALLBACK_DIR)
        }
    }
}

/// Create the data directory (and parents) if missing
pub fn ensure_data_dir(dir: &Path) -> Result<(), PersistError> {
    fs::create_dir_all(dir).map_err(|e| PersistError::io(dir, e))?;
    log::debug!("Data directory ready: {}", dir.display());
    Ok(())
}
