//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shop
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{RosterError, RosterResult};

use super::types::{OperatingHours, ShopConfig, ShopInfo};

/// Loads and provides access to the shop configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/shop/
/// ├── shop.yaml   # Shop metadata (name, timezone)
/// └── hours.yaml  # Daily open/close window
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/shop").unwrap();
/// println!("Open from {}", loader.operating_hours().open);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ShopConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/shop")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The operating window is empty or inverted
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();

        let info = Self::load_yaml::<ShopInfo>(&path.join("shop.yaml"))?;
        let hours = Self::load_yaml::<OperatingHours>(&path.join("hours.yaml"))?;

        let config = ShopConfig::new(info, hours)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RosterResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RosterError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying shop configuration.
    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Returns the daily operating window.
    pub fn operating_hours(&self) -> &OperatingHours {
        self.config.operating_hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/shop"
    }

    #[test]
    fn test_load_valid_configuration() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let hours = loader.operating_hours();
        assert!(hours.open.is_before(hours.close));
    }

    #[test]
    fn test_loaded_shop_info_has_name() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(!loader.config().info().name.is_empty());
    }

    #[test]
    fn test_load_missing_directory_returns_not_found() {
        let result = ConfigLoader::load("./config/does-not-exist");
        match result.unwrap_err() {
            RosterError::ConfigNotFound { path } => {
                assert!(path.contains("does-not-exist"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }
}
