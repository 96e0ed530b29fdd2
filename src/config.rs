//! Runtime configuration from environment variables.
//!
//! - `TETRIS_LEVEL`: starting level 1-9 (default 1)
//! - `TETRIS_SEED`: u64 seed for a reproducible piece sequence (default: random)
//! - `TETRIS_LOG`: tracing filter directive (default "info")
//! - `TETRIS_LOG_FILE`: write logs to this file; logging is off when unset
//!
//! Malformed values fall back to their defaults and are reported in `warnings`.

use std::path::PathBuf;

use crate::types::Level;

pub const ENV_LEVEL: &str = "TETRIS_LEVEL";
pub const ENV_SEED: &str = "TETRIS_SEED";
pub const ENV_LOG: &str = "TETRIS_LOG";
pub const ENV_LOG_FILE: &str = "TETRIS_LOG_FILE";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub level: Level,
    pub seed: Option<u64>,
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
    /// Problems found while reading the environment.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::default(),
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LEVEL) {
            match raw.trim().parse::<u8>().ok().and_then(|n| Level::new(n).ok()) {
                Some(level) => config.level = level,
                None => config
                    .warnings
                    .push(format!("{ENV_LEVEL}={raw:?} is not a level 1-9; using 1")),
            }
        }

        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config
                    .warnings
                    .push(format!("{ENV_SEED}={raw:?} is not a u64; using a random seed")),
            }
        }

        if let Some(raw) = lookup(ENV_LOG) {
            if !raw.trim().is_empty() {
                config.log_filter = raw.trim().to_string();
            }
        }

        config.log_file = lookup(ENV_LOG_FILE)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        config
    }
}
