//! Unified path management for Jot files.
//!
//! All Jot configuration and task data live under the platform's standard
//! config and data directories, resolved through the `dirs` crate.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Jot.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/jot/               # Config directory
/// └── config.toml              # Application configuration
///
/// ~/.local/share/jot/          # Data directory
/// └── todo.tasks.v1.json       # Persisted task collection
/// ```
pub struct JotPaths;

impl JotPaths {
    /// Returns the Jot configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/jot/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("jot"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the Jot data directory.
    ///
    /// This is where the persisted task collection lives.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/jot/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("jot"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_config_dir() {
        // Skip on environments without a resolvable home directory
        if let (Ok(dir), Ok(file)) = (JotPaths::config_dir(), JotPaths::config_file()) {
            assert!(file.starts_with(&dir));
            assert_eq!(file.file_name().unwrap(), "config.toml");
        }
    }

    #[test]
    fn test_data_dir_is_namespaced() {
        if let Ok(dir) = JotPaths::data_dir() {
            assert!(dir.ends_with("jot"));
        }
    }
}
