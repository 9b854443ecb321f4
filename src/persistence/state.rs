//! Persisted game state

use serde::{Deserialize, Serialize};

/// Snapshot of the gameplay counters written to the save slot.
///
/// Field order is the on-disk key order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub score: i32,
    pub lives: i32,
    pub difficulty: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_missing_fields() {
        let result = serde_json::from_str::<GameState>(r#"{ "score": 1, "lives": 2 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_wrong_types() {
        let result =
            serde_json::from_str::<GameState>(r#"{ "score": "many", "lives": 2, "difficulty": 1.0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_collection_is_not_a_state() {
        let result = serde_json::from_str::<GameState>(
            r#"[{ "score": 1, "lives": 2, "difficulty": 1.0 }]"#,
        );
        assert!(result.is_err());
    }
}
