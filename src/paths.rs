//! Centralized path definitions for fritoto
//!
//! fritoto keeps no state of its own; the only path it resolves is the
//! optional user configuration file.
//!
//! ```text
//! $XDG_CONFIG_HOME/fritoto/        # ~/.config/fritoto on Linux
//! └── config.toml                  # Default notes, digest algorithms
//! ```

use std::path::PathBuf;

/// Global config directory name
const CONFIG_DIR: &str = "fritoto";

/// Global config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the fritoto config directory.
///
/// Uses the platform config directory, falling back to `~/.config`.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

/// Get the default config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
