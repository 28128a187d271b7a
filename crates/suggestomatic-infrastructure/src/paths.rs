//! Unified path management for Suggest-O-Matic data files.
//!
//! All persisted state lives under the platform config directory in a
//! `suggestomatic/` subdirectory. The document file name is the fixed
//! storage key of the original browser build, kept so the two on-disk
//! shapes line up.

use std::path::PathBuf;

/// File name of the persisted document blob (the fixed storage key).
pub const DOCUMENT_FILE: &str = "friends_startup_data_v1.json";

/// File name of the presenter announcement singleton.
pub const ANNOUNCEMENT_FILE: &str = "presenter_announcement.json";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Suggest-O-Matic.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/suggestomatic/
/// ├── friends_startup_data_v1.json   # The document (users, profiles, ideas)
/// └── presenter_announcement.json    # Presenter announcement singleton
/// ```
pub struct SuggestPaths;

impl SuggestPaths {
    /// Returns the application config directory
    /// (e.g., `~/.config/suggestomatic/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("suggestomatic"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the persisted document blob.
    pub fn document_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(DOCUMENT_FILE))
    }

    /// Returns the path to the persisted announcement singleton.
    pub fn announcement_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(ANNOUNCEMENT_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = SuggestPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("suggestomatic"));
    }

    #[test]
    fn test_document_file() {
        let document_file = SuggestPaths::document_file().unwrap();
        assert!(document_file.ends_with(DOCUMENT_FILE));
        let config_dir = SuggestPaths::config_dir().unwrap();
        assert!(document_file.starts_with(&config_dir));
    }

    #[test]
    fn test_announcement_file() {
        let announcement_file = SuggestPaths::announcement_file().unwrap();
        assert!(announcement_file.ends_with(ANNOUNCEMENT_FILE));
        let config_dir = SuggestPaths::config_dir().unwrap();
        assert!(announcement_file.starts_with(&config_dir));
    }
}
