//! Display preferences supplied by the host dashboard.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::locale::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Drives numerals and popup labels
    pub language:                   Language,
    /// Render Bengali grid day numbers in Bengali numerals whatever the language
    pub bengali_grid_native_digits: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language:                   Language::default(),
            bengali_grid_native_digits: true,
        }
    }
}

/// Error type for loading display configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid display configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl DisplayConfig {
    /// # Errors
    /// Returns `ConfigError::Parse` if `raw` is not a valid configuration document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, or
    /// `ConfigError::Parse` if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), language = %config.language, "loaded display config");
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError::Parse` if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
