//! Runtime configuration for git-iswitch
//!
//! There are no configuration files. Settings come from built-in defaults and
//! the `DEBUG` environment variable.

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use std::path::PathBuf;

/// Environment variable controlling log verbosity
pub const DEBUG_ENV_VAR: &str = "DEBUG";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log verbosity (0=off, 1=warn, 2=info, 3+=debug)
    pub debug_level: u8,

    /// Directory the log file is written to
    pub log_dir: PathBuf,

    /// Name of the log file inside `log_dir`
    pub log_file_name: String,

    /// Keybindings configuration
    pub keys: KeyBindings,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("/tmp")
}

fn default_log_file_name() -> String {
    format!("{}.log", env!("CARGO_PKG_NAME"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug_level: 0,
            log_dir: default_log_dir(),
            log_file_name: default_log_file_name(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Build the configuration from defaults and the environment
    #[must_use]
    pub fn from_env() -> Self {
        let debug = std::env::var(DEBUG_ENV_VAR).ok();
        Self {
            debug_level: parse_debug_level(debug.as_deref()),
            ..Self::default()
        }
    }

    /// Full path of the log file
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }

    /// Tracing level for the configured verbosity, or `None` when logging is off
    #[must_use]
    pub const fn log_level(&self) -> Option<tracing::Level> {
        match self.debug_level {
            0 => None,
            1 => Some(tracing::Level::WARN),
            2 => Some(tracing::Level::INFO),
            _ => Some(tracing::Level::DEBUG),
        }
    }
}

/// Parse a `DEBUG` value; anything missing or non-numeric means off
#[must_use]
pub fn parse_debug_level(value: Option<&str>) -> u8 {
    value
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(0)
}
