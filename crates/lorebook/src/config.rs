//! Runtime settings.
//!
//! Settings come from an optional YAML file. Every field has a default, so
//! an empty file (or no file) is valid. Command-line flags override file
//! values, and `RUST_LOG` overrides [`LorebookConfig::log_filter`].
//!
//! ```yaml
//! data_dir: ./data
//! log_filter: lorebook=debug
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "lorebook=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LorebookConfig {
    /// Directory holding `{collection}.json|yaml|yml` entry files.
    pub data_dir: PathBuf,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl Default for LorebookConfig {
    fn default() -> Self {
        LorebookConfig {
            data_dir: PathBuf::from("data"),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LorebookConfig {
    /// Reads a YAML settings file.
    ///
    /// A relative `data_dir` is resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.data_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.data_dir = parent.join(&config.data_dir);
            }
        }
        Ok(config)
    }

    /// Parses settings from YAML text. Blank text yields the defaults.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}
