//! Application configuration.
//!
//! Jot reads an optional TOML file from `~/.config/jot/config.toml`. A
//! missing or unreadable file is not an error: the application falls back to
//! defaults so a fresh install works with no setup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use jot_core::error::Result;
use jot_core::JotError;

use crate::paths::JotPaths;

/// Application configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JotConfig {
    /// Overrides the directory the task collection file is stored in.
    /// Defaults to the platform data directory when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl JotConfig {
    /// Loads the configuration from the default config file path.
    ///
    /// Falls back to defaults if the file does not exist, cannot be read, or
    /// cannot be parsed; parse failures are logged rather than surfaced.
    pub fn load() -> Self {
        match JotPaths::config_file() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!("Cannot resolve config file path: {}", e);
                Self::default()
            }
        }
    }

    /// Loads the configuration from a specific file path.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read config file at {:?}: {}", path, e);
                return Self::default();
            }
        };

        if content.trim().is_empty() {
            return Self::default();
        }

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to parse config file at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Resolves the directory the task collection file is stored in.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: The configured override, or the platform data
    ///   directory
    /// - `Err(JotError::Config)`: No override is set and the platform data
    ///   directory cannot be determined
    pub fn task_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        JotPaths::data_dir().map_err(|e| JotError::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let config = JotConfig::load_from(Path::new("/nonexistent/jot/config.toml"));
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_load_data_dir_override() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "data_dir = \"/tmp/jot-tasks\"").unwrap();
        temp_file.flush().unwrap();

        let config = JotConfig::load_from(temp_file.path());
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/jot-tasks")));
        assert_eq!(
            config.task_data_dir().unwrap(),
            PathBuf::from("/tmp/jot-tasks")
        );
    }

    #[test]
    fn test_load_empty_file_yields_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = JotConfig::load_from(temp_file.path());
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_load_garbage_file_yields_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "this is not = valid = toml [[").unwrap();
        temp_file.flush().unwrap();

        let config = JotConfig::load_from(temp_file.path());
        assert!(config.data_dir.is_none());
    }
}
