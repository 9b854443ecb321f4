//! Game settings and preferences
//!
//! Persisted separately from game saves, in the preference store.

use serde::{Deserialize, Serialize};

use crate::platform::PreferenceStore;

/// Preference key for the music volume (float)
pub const VOLUME_KEY: &str = "GlobalMusicVolume";
/// Preference key for particle effects (int, 0 or 1)
pub const PARTICLES_KEY: &str = "ParticleEffectsEnabled";

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Particle effects (explosions, sparks, etc.)
    pub show_particles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_volume: 1.0,
            show_particles: true,
        }
    }
}

/// Settings bound to the preference store that persists them.
///
/// The only constructor is [`SettingsStore::load`], so settings can never be
/// read before they were loaded. Every setter flushes the store before
/// returning.
#[derive(Debug)]
pub struct SettingsStore<P: PreferenceStore> {
    prefs: P,
    current: Settings,
}

impl<P: PreferenceStore> SettingsStore<P> {
    /// Load settings from the preference store. Missing keys fall back to
    /// [`Settings::default`]; this never fails.
    pub fn load(prefs: P) -> Self {
        let defaults = Settings::default();
        let music_volume = prefs.get_float(VOLUME_KEY, defaults.music_volume);
        let show_particles = prefs.get_int(PARTICLES_KEY, defaults.show_particles as i32) == 1;

        let current = Settings {
            music_volume,
            show_particles,
        };
        log::info!(
            "Settings loaded: volume {:.2}, particles {}",
            current.music_volume,
            current.show_particles
        );
        Self { prefs, current }
    }

    /// Current settings snapshot
    pub fn settings(&self) -> Settings {
        self.current
    }

    pub fn music_volume(&self) -> f32 {
        self.current.music_volume
    }

    pub fn show_particles(&self) -> bool {
        self.current.show_particles
    }

    /// Update the music volume and persist it immediately.
    /// Clamped to 0.0 - 1.0; non-finite values are ignored.
    pub fn set_music_volume(&mut self, volume: f32) {
        if !volume.is_finite() {
            log::warn!("Ignoring non-finite music volume {}", volume);
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.current.music_volume = volume;
        self.prefs.set_float(VOLUME_KEY, volume);
        self.persist();
    }

    /// Update the particle toggle and persist it immediately (stored as 0/1)
    pub fn set_show_particles(&mut self, show: bool) {
        self.current.show_particles = show;
        self.prefs.set_int(PARTICLES_KEY, if show { 1 } else { 0 });
        self.persist();
    }

    fn persist(&mut self) {
        match self.prefs.flush() {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::error!("Failed to save settings: {}", e),
        }
    }

    /// Borrow the backing store
    pub fn preferences(&self) -> &P {
        &self.prefs
    }

    /// Give back the backing store (e.g. to reload it as after a restart)
    pub fn into_preferences(self) -> P {
        self.prefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FilePreferences, MemoryPreferences};
    use tempfile::tempdir;

    #[test]
    fn test_first_run_defaults() {
        let store = SettingsStore::load(MemoryPreferences::new());
        assert_eq!(store.music_volume(), 1.0);
        assert!(store.show_particles());
        assert_eq!(store.settings(), Settings::default());
    }

    #[test]
    fn test_volume_survives_reload() {
        let mut store = SettingsStore::load(MemoryPreferences::new());
        store.set_music_volume(0.3);
        assert_eq!(store.music_volume(), 0.3);

        let reloaded = SettingsStore::load(store.into_preferences());
        assert_eq!(reloaded.music_volume(), 0.3);
    }

    #[test]
    fn test_setters_flush_immediately() {
        let mut store = SettingsStore::load(MemoryPreferences::new());
        store.set_music_volume(0.5);
        assert_eq!(store.preferences().flush_count(), 1);
        store.set_show_particles(false);
        assert_eq!(store.preferences().flush_count(), 2);
    }

    #[test]
    fn test_particles_stored_as_int() {
        let mut store = SettingsStore::load(MemoryPreferences::new());
        store.set_show_particles(false);
        assert_eq!(store.preferences().get_int(PARTICLES_KEY, -1), 0);
        store.set_show_particles(true);
        assert_eq!(store.preferences().get_int(PARTICLES_KEY, -1), 1);
    }

    #[test]
    fn test_particles_non_one_reads_false() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_int(PARTICLES_KEY, 2);
        let store = SettingsStore::load(prefs);
        assert!(!store.show_particles());
    }

    #[test]
    fn test_volume_clamped_and_nan_ignored() {
        let mut store = SettingsStore::load(MemoryPreferences::new());
        store.set_music_volume(1.7);
        assert_eq!(store.music_volume(), 1.0);
        store.set_music_volume(-0.2);
        assert_eq!(store.music_volume(), 0.0);

        store.set_music_volume(f32::NAN);
        assert_eq!(store.music_volume(), 0.0);
        assert_eq!(store.preferences().flush_count(), 2);
    }

    #[test]
    fn test_file_backed_restart() {
        let dir = tempdir().unwrap();
        {
            let mut store = SettingsStore::load(FilePreferences::in_dir(dir.path()));
            store.set_music_volume(0.3);
            store.set_show_particles(false);
        }

        // Simulated process restart
        let store = SettingsStore::load(FilePreferences::in_dir(dir.path()));
        assert_eq!(store.music_volume(), 0.3);
        assert!(!store.show_particles());
    }

    #[test]
    fn test_flush_failure_keeps_value() {
        let dir = tempdir().unwrap();
        let prefs = FilePreferences::open(dir.path().join("missing").join("prefs.json"));
        let mut store = SettingsStore::load(prefs);
        store.set_music_volume(0.25);
        assert_eq!(store.music_volume(), 0.25);
    }
}
