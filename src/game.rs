//! Live gameplay counters
//!
//! The part of the game scene that the menus save and restore.

use crate::persistence::{GameState, SaveStore};
use crate::scene::LaunchMode;

/// Lives at the start of a fresh run
pub const STARTING_LIVES: i32 = 3;
/// Spawn rate at the start of a fresh run
pub const STARTING_SPAWN_RATE: f32 = 1.0;

/// Counters of the running game
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub score: i32,
    pub lives: i32,
    pub spawn_rate: f32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            spawn_rate: STARTING_SPAWN_RATE,
        }
    }
}

impl GameSession {
    /// Start the game scene. `Continue` restores from the save slot and
    /// falls back to a fresh run when there is nothing to restore.
    pub fn start(mode: LaunchMode, saves: &SaveStore) -> Self {
        match mode {
            LaunchMode::NewGame => {
                log::info!("Starting new game");
                Self::default()
            }
            LaunchMode::Continue => match saves.load() {
                Some(state) if state.lives > 0 => {
                    log::info!("Continuing saved game (score {})", state.score);
                    Self::from_state(&state)
                }
                Some(state) => {
                    log::warn!("Saved run has no lives left ({}), starting new game", state.lives);
                    Self::default()
                }
                None => {
                    log::warn!("Nothing to continue, starting new game");
                    Self::default()
                }
            },
        }
    }

    /// Restore counters; negative lives read as zero
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            lives: state.lives.max(0),
            spawn_rate: state.difficulty,
        }
    }

    /// Snapshot for the save slot
    pub fn snapshot(&self) -> GameState {
        GameState {
            score: self.score,
            lives: self.lives,
            difficulty: self.spawn_rate,
        }
    }

    pub fn add_score(&mut self, points: i32) {
        self.score = self.score.saturating_add(points);
    }

    /// Lose one life. When the last one goes the run is over and its save
    /// is cleared so it cannot be continued.
    pub fn lose_life(&mut self, saves: &SaveStore) {
        self.lives = self.lives.saturating_sub(1).max(0);
        if self.is_over() {
            log::info!("Game over (score {})", self.score);
            if let Err(e) = saves.delete() {
                log::error!("Failed to clear save: {}", e);
            }
        }
    }

    pub fn is_over(&self) -> bool {
        self.lives <= 0
    }
}
