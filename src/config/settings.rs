//! Persisted defaults for tobuddy
//!
//! The settings file stores an [`AccrualConfig`] used as the fallback for any
//! option not given on the command line or in the environment.

use serde::{Deserialize, Serialize};

use super::accrual::AccrualConfig;
use super::paths::TobuddyPaths;
use crate::error::TobuddyError;

/// User settings for tobuddy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Fallback values for every option
    #[serde(default)]
    pub defaults: AccrualConfig,
}

fn default_schema_version() -> u32 {
    1
}

impl Settings {
    /// Settings wrapping the given defaults
    pub fn with_defaults(defaults: AccrualConfig) -> Self {
        Self {
            schema_version: default_schema_version(),
            defaults,
        }
    }

    /// Load settings from disk, or fall back to built-in defaults if the file doesn't exist
    pub fn load_or_default(paths: &TobuddyPaths) -> Result<Self, TobuddyError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            log::debug!("no settings file at {}", settings_path.display());
            return Ok(Self::with_defaults(AccrualConfig::default()));
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TobuddyError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            TobuddyError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        log::debug!("loaded settings from {}", settings_path.display());
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TobuddyPaths) -> Result<(), TobuddyError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TobuddyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TobuddyError::Io(format!("Failed to write settings file: {}", e)))?;

        log::info!("saved defaults to {}", settings_path.display());
        Ok(())
    }
}
