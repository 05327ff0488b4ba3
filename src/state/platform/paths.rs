//! Platform-specific locations for configuration and data files.
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/lazyneo` | `~/.local/share/lazyneo` |
//! | macOS | `~/Library/Application Support/lazyneo` | Same as config |
//! | Windows | `%APPDATA%/lazyneo` | `%APPDATA%/lazyneo` |

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "lazyneo";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Address book file name.
pub const CONTACTS_FILE_NAME: &str = "contacts.json";

/// Log file name.
pub const LOG_FILE_NAME: &str = "lazyneo.log";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves the application's directories and files.
#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    /// Creates paths rooted at the default application name.
    #[must_use]
    pub fn new() -> Self {
        Self::with_app_name(APP_NAME)
    }

    /// Creates paths rooted at a custom application name.
    #[must_use]
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find config directory"))?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the data directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::data_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find data directory"))?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Path of `config.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory is unavailable.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Path of `contacts.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory is unavailable.
    pub fn contacts_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONTACTS_FILE_NAME))
    }

    /// Path of the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is unavailable.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_paths_names() {
        assert_eq!(AppPaths::new().app_name, APP_NAME);
        assert_eq!(AppPaths::with_app_name("custom").app_name, "custom");
    }

    #[test]
    fn test_file_names_when_dirs_resolve() {
        let paths = AppPaths::new();
        if let Ok(path) = paths.config_file() {
            assert!(path.ends_with("lazyneo/config.json"));
        }
        if let Ok(path) = paths.contacts_file() {
            assert!(path.ends_with("lazyneo/contacts.json"));
        }
        if let Ok(path) = paths.log_file() {
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("log"));
        }
    }
}
