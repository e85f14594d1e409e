//! Game configuration
//!
//! Loaded from JSON the same way animation configs are: a serde struct read
//! from `assets/config/`. Missing fields fall back to the defaults below.

use crate::game::types::MIN_SCREEN_EDGE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Per-user override lives at `<config dir>/tap-counter/game.json`
const USER_CONFIG_DIR: &str = "tap-counter";
const CONFIG_FILE_NAME: &str = "game.json";
const BUNDLED_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of one game
    pub initial_countdown_ms: u64,

    /// How often the time display refreshes
    pub countdown_interval_ms: u64,

    /// How long a "+1" stays on screen
    pub indicator_lifetime_ms: u64,

    /// Logical resolution; portrait uses short x long, landscape long x short
    pub screen_short_edge: u32,
    pub screen_long_edge: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            initial_countdown_ms: 60_000,
            countdown_interval_ms: 1_000,
            indicator_lifetime_ms: 1_000,
            screen_short_edge: 360,
            screen_long_edge: 640,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Picks the config to run with.
    ///
    /// An explicit path must load. Otherwise the user override and then the
    /// bundled file are tried, and the built-in defaults are used if neither
    /// exists.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let candidates = dirs::config_dir()
            .map(|dir| dir.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
            .into_iter()
            .chain(std::iter::once(PathBuf::from(BUNDLED_CONFIG_PATH)));
        Self::first_existing(candidates)
    }

    /// Loads the first candidate that exists, or the defaults if none does
    fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Result<Self, ConfigError> {
        for candidate in candidates {
            if candidate.exists() {
                log::info!("Loading config from {}", candidate.display());
                return Self::load_from_file(&candidate);
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_countdown_ms == 0 {
            return Err(ConfigError::Invalid(
                "initial_countdown_ms must be greater than zero".to_string(),
            ));
        }
        if self.countdown_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "countdown_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.screen_short_edge < MIN_SCREEN_EDGE
            || self.screen_short_edge > self.screen_long_edge
        {
            return Err(ConfigError::Invalid(format!(
                "screen edges must satisfy {} <= short ({}) <= long ({})",
                MIN_SCREEN_EDGE, self.screen_short_edge, self.screen_long_edge
            )));
        }
        Ok(())
    }

    pub fn initial_countdown(&self) -> Duration {
        Duration::from_millis(self.initial_countdown_ms)
    }

    pub fn countdown_interval(&self) -> Duration {
        Duration::from_millis(self.countdown_interval_ms)
    }

    pub fn indicator_lifetime(&self) -> Duration {
        Duration::from_millis(self.indicator_lifetime_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "tap-counter-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_are_one_minute() {
        let config = GameConfig::default();
        assert_eq!(config.initial_countdown(), Duration::from_secs(60));
        assert_eq!(config.countdown_interval(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = write_temp("partial", r#"{ "initial_countdown_ms": 30000 }"#);
        let config = GameConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.initial_countdown_ms, 30_000);
        assert_eq!(config.countdown_interval_ms, 1_000);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let path = write_temp("zero", r#"{ "countdown_interval_ms": 0 }"#);
        let result = GameConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let path = write_temp("bad", "{ not json");
        let result = GameConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_explicit_missing_path_fails() {
        let result = GameConfig::resolve(Some(Path::new("/nonexistent/tap-counter.json")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_tiny_screen_rejected() {
        let config = GameConfig {
            screen_short_edge: 20,
            screen_long_edge: 30,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            screen_short_edge: MIN_SCREEN_EDGE,
            screen_long_edge: MIN_SCREEN_EDGE,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_config_file_falls_back_to_defaults() {
        let candidates = vec![
            PathBuf::from("/nonexistent/tap-counter/game.json"),
            PathBuf::from("/nonexistent/assets/config/game.json"),
        ];
        let config = GameConfig::first_existing(candidates).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let path = write_temp("candidate", r#"{ "initial_countdown_ms": 15000 }"#);
        let candidates = vec![PathBuf::from("/nonexistent/game.json"), path.clone()];
        let config = GameConfig::first_existing(candidates);
        std::fs::remove_file(&path).ok();
        assert_eq!(config.unwrap().initial_countdown_ms, 15_000);
    }
}
