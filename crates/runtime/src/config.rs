//! Runtime configuration from environment variables.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::GameState;

pub const SEED_VAR: &str = "TETRIS_SEED";
pub const LOG_FILE_VAR: &str = "TETRIS_LOG_FILE";
pub const LOG_FILTER_VAR: &str = "TETRIS_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid seed (expected an unsigned 64-bit integer)")]
    InvalidSeed { var: &'static str, value: String },
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Fixed seed for reproducible piece sequences; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match get(SEED_VAR) {
            Some(value) => Some(value.parse().map_err(|_| ConfigError::InvalidSeed {
                var: SEED_VAR,
                value,
            })?),
            None => None,
        };

        Ok(Self {
            seed,
            log_file: get(LOG_FILE_VAR).map(PathBuf::from),
            log_filter: get(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// A fresh engine using the configured seed.
    pub fn game_state(&self) -> GameState {
        match self.seed {
            Some(seed) => GameState::new(seed),
            None => GameState::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = RuntimeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_all_variables() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            ("TETRIS_SEED", " 42 "),
            ("TETRIS_LOG_FILE", "/tmp/tetris.log"),
            ("TETRIS_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/tetris.log")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            RuntimeConfig::from_lookup(lookup(&[("TETRIS_SEED", ""), ("TETRIS_LOG_FILE", "  ")]))
                .unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn malformed_seed_is_rejected() {
        let err = RuntimeConfig::from_lookup(lookup(&[("TETRIS_SEED", "-3")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidSeed {
                var: "TETRIS_SEED",
                value: "-3".to_string()
            }
        );
        assert!(err.to_string().contains("TETRIS_SEED"));
    }

    #[test]
    fn seeded_config_builds_reproducible_games() {
        let config = RuntimeConfig {
            seed: Some(7),
            ..RuntimeConfig::default()
        };
        let mut a = config.game_state();
        let mut b = config.game_state();
        a.spawn_piece();
        b.spawn_piece();
        assert_eq!(a.active(), b.active());
    }
}
