//! Application configuration with persistence.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/lazyneo/config.json`
//! - macOS: `~/Library/Application Support/lazyneo/config.json`
//! - Windows: `%APPDATA%/lazyneo/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.explorer = Explorer::NeoTracker;
//! config.save()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::platform::AppPaths;
use crate::domain::{Explorer, Network};

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted application settings.
///
/// # Fields
///
/// * `network` - Network whose explorer links are opened
/// * `explorer` - Block explorer used for "View"
/// * `address` - Wallet address whose history is shown
/// * `history_file` - Last history export that was opened
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub network: Network,
    #[serde(default)]
    pub explorer: Explorer,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_file: Option<PathBuf>,
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or its JSON cannot be parsed.
    pub fn try_load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Applies command-line overrides.
    ///
    /// # Returns
    ///
    /// `true` when any setting changed and the config should be saved.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) -> bool {
        let before = self.clone();

        if let Some(network) = overrides.network {
            self.network = network;
        }
        if let Some(explorer) = overrides.explorer {
            self.explorer = explorer;
        }
        if let Some(address) = overrides.address {
            self.address = address;
        }
        if let Some(history_file) = overrides.history_file {
            self.history_file = Some(history_file);
        }

        *self != before
    }
}

/// Settings given on the command line, each overriding the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub network: Option<Network>,
    pub explorer: Option<Explorer>,
    pub address: Option<String>,
    pub history_file: Option<PathBuf>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.network, Network::MainNet);
        assert_eq!(config.explorer, Explorer::NeoScan);
        assert!(config.address.is_empty());
        assert!(config.history_file.is_none());
    }

    #[rstest]
    #[case::mainnet_neoscan(Network::MainNet, Explorer::NeoScan)]
    #[case::testnet_neotracker(Network::TestNet, Explorer::NeoTracker)]
    fn test_serialization_roundtrip(#[case] network: Network, #[case] explorer: Explorer) {
        let config = AppConfig {
            network,
            explorer,
            address: "AWALLET".to_string(),
            history_file: Some(PathBuf::from("/tmp/history.json")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"network":"TestNet"}"#).unwrap();
        assert_eq!(config.network, Network::TestNet);
        assert_eq!(config.explorer, Explorer::NeoScan);
        assert!(config.address.is_empty());
    }

    #[test]
    fn test_json_omits_absent_history_file() {
        let json = serde_json::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(json.contains("explorer"));
        assert!(!json.contains("history_file"));
    }

    #[test]
    fn test_overrides_report_changes() {
        let mut config = AppConfig::default();
        assert!(!config.apply_overrides(ConfigOverrides::default()));

        let changed = config.apply_overrides(ConfigOverrides {
            network: Some(Network::TestNet),
            address: Some("AWALLET".to_string()),
            ..ConfigOverrides::default()
        });
        assert!(changed);
        assert_eq!(config.network, Network::TestNet);
        assert_eq!(config.address, "AWALLET");
        assert_eq!(config.explorer, Explorer::NeoScan);

        assert!(!config.apply_overrides(ConfigOverrides {
            network: Some(Network::TestNet),
            ..ConfigOverrides::default()
        }));
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = std::env::temp_dir().join(format!("lazyneo-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");

        let config = AppConfig {
            explorer: Explorer::NeoTracker,
            ..AppConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("lazyneo-does-not-exist/config.json");
        assert!(AppConfig::load_from(&path).is_err());
    }
}
