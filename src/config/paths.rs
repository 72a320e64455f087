//! Path management for tobuddy
//!
//! ## Path Resolution Order
//!
//! 1. `TOBUDDY_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory for `tobuddy`
//!    (`~/.config/tobuddy` on Linux, `~/Library/Application Support/tobuddy`
//!    on macOS, `%APPDATA%\tobuddy\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TobuddyError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TOBUDDY_CONFIG_DIR";

/// Manages all paths used by tobuddy
#[derive(Debug, Clone)]
pub struct TobuddyPaths {
    /// Directory holding the settings file
    base_dir: PathBuf,
}

impl TobuddyPaths {
    /// Create a new TobuddyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TobuddyError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TobuddyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), TobuddyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TobuddyError::Io(format!("Failed to create config directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, TobuddyError> {
    ProjectDirs::from("", "", "tobuddy")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TobuddyError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TobuddyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(CONFIG_DIR_ENV, custom_path);

        let paths = TobuddyPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(CONFIG_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("tobuddy");
        let paths = TobuddyPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.is_dir());
    }
}
