//! Instance state types
//!
//! Keys and error types shared by the bundle and everything that saves
//! itself into one.

use std::time::Duration;

pub const KEY_SCORE: &str = "KEY_SCORE";
pub const KEY_TIME_LEFT: &str = "KEY_TIME_LEFT";
pub const KEY_GAME_STARTED: &str = "KEY_GAME_STARTED";

/// Error types for saving/restoring instance state
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Missing key in saved state: {0}")]
    MissingKey(String),

    #[error("Key {key} holds a {found}, expected {expected}")]
    WrongType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Value for {key} out of range: {value}")]
    OutOfRange { key: String, value: i64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The values a screen carries across being torn down and rebuilt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub score: u32,
    pub time_left: Duration,
    pub started: bool,
}
