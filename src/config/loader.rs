//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the directory
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{DirectoryError, DirectoryResult};

use super::types::DirectoryConfig;

/// Loads and provides access to the directory configuration.
///
/// # File Format
///
/// ```text
/// missing_id_policy: ignore     # or: reject
/// seed:
///   - id: 1
///     name: John Doe
///     position: Developer
///     department: IT
///     email: john@company.com
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_directory::config::ConfigLoader;
/// use employee_directory::store::EmployeeStore;
///
/// let loader = ConfigLoader::load("./config/directory.yaml")?;
/// let store = EmployeeStore::from_config(loader.config())?;
/// println!("Loaded {} employees", store.len());
/// # Ok::<(), employee_directory::error::DirectoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DirectoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown values (`ConfigParseError`)
    ///
    /// Seed records are not validated here; that happens when the store is
    /// built from the configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> DirectoryResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DirectoryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| DirectoryError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(
            path = %path_str,
            seed_count = config.seed.len(),
            policy = ?config.missing_id_policy,
            "Loaded directory configuration"
        );

        Ok(Self { config })
    }

    /// Parses YAML content. Blank content is the default configuration.
    fn parse(content: &str) -> Result<DirectoryConfig, String> {
        if content.trim().is_empty() {
            return Ok(DirectoryConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> DirectoryConfig {
        self.config
    }
}
