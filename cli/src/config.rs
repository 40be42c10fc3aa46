//! Configuration management for the box office.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Nothing here changes what the hall does; it only tunes logging and the
//! size of hall the prompt will accept.

use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log output configuration
    pub logging: LoggingConfig,
    /// Interactive session configuration
    pub session: SessionConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive (e.g. `warn`, `cinema_core=debug`)
    pub filter: String,
    /// Colourise log lines
    pub ansi: bool,
}

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Largest hall (rows × seats) accepted at the opening prompt
    pub max_capacity: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            ansi: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `CINEMA_LOG` (then `RUST_LOG`) | `warn` |
    /// | `CINEMA_LOG_ANSI` | `false` |
    /// | `CINEMA_MAX_CAPACITY` | `10000` |
    ///
    /// Unparsable values fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            logging: LoggingConfig {
                filter: lookup("CINEMA_LOG")
                    .or_else(|| lookup("RUST_LOG"))
                    .unwrap_or(defaults.logging.filter),
                ansi: lookup("CINEMA_LOG_ANSI")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.logging.ansi),
            },
            session: SessionConfig {
                max_capacity: lookup("CINEMA_MAX_CAPACITY")
                    .and_then(|s| s.parse().ok())
                    .filter(|max| *max > 0)
                    .unwrap_or(defaults.session.max_capacity),
            },
        }
    }
}
