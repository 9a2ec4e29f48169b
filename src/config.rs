//! User configuration
//!
//! Optional defaults read from `~/.config/fritoto/config.toml` (XDG
//! standard) or from the file passed with `--config`:
//!
//! ```toml
//! [attestation]
//! notes = "built by the release pipeline"
//! algorithms = ["sha256", "sha512"]
//! ```
//!
//! Command-line flags always win over the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::DigestAlgorithm;
use crate::error::{FritotoError, Result};
use crate::paths;

/// fritoto configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Attestation defaults
    #[serde(default)]
    pub attestation: AttestationConfig,
}

/// Defaults applied to every attestation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttestationConfig {
    /// Note used when `--notes` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Digest algorithms computed for every subject
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<DigestAlgorithm>,
}

fn default_algorithms() -> Vec<DigestAlgorithm> {
    DigestAlgorithm::DEFAULT_SET.to_vec()
}

impl Default for AttestationConfig {
    fn default() -> Self {
        Self {
            notes: None,
            algorithms: default_algorithms(),
        }
    }
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from an explicit path, or the default location
    ///
    /// A missing default file yields the built-in defaults; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load and validate config from `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| FritotoError::config(path, e))?;
        let config = Self::parse(&content).map_err(|reason| FritotoError::config(path, reason))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config text
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        if config.attestation.algorithms.is_empty() {
            return Err("attestation.algorithms must list at least one algorithm".to_string());
        }
        Ok(config)
    }
}
