//! TOML-based CLI settings.
//!
//! Stored at `~/.config/pomo/config.toml`. Every field has a default, so
//! a missing or partial file is fine. Command-line flags override
//! whatever the file says.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Interval lengths in minutes.
///
/// Serialized to/from TOML at `~/.config/pomo/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_work")]
    pub work: u64,
    #[serde(default = "default_short_break")]
    pub short_break: u64,
    #[serde(default = "default_long_break")]
    pub long_break: u64,
}

fn default_work() -> u64 {
    25
}

fn default_short_break() -> u64 {
    5
}

fn default_long_break() -> u64 {
    15
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work: default_work(),
            short_break: default_short_break(),
            long_break: default_long_break(),
        }
    }
}

impl Settings {
    /// `~/.config/pomo/config.toml`, when a config dir exists at all.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pomo").join("config.toml"))
    }

    /// Load settings from the default location; a missing file yields
    /// the defaults.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Minutes to a wall-clock duration.
pub fn minutes(m: u64) -> Duration {
    Duration::from_secs(m * 60)
}
