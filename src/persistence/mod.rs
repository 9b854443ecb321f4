//! Save/load persistence
//!
//! Features:
//! - Single save slot at a fixed path in the data directory
//! - Pretty-printed JSON with stable key order
//! - Lenient API (log and swallow) plus strict `try_*` variants

pub mod slot;
pub mod state;

pub use slot::{SAVE_FILE_NAME, SaveStore};
pub use state::GameState;
