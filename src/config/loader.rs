//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the console
//! configuration from a YAML file, with environment overrides.

use std::fs;
use std::path::Path;

use crate::error::{ConsoleError, ConsoleResult};

use super::types::{Capabilities, ConsoleConfig, DatabaseConfig, ServerConfig};

/// Environment variable overriding `database.url`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Environment variable overriding `server.bind_address`.
pub const BIND_ADDRESS_ENV: &str = "BIND_ADDRESS";

/// Loads and provides access to the console configuration.
///
/// # File Format
///
/// ```text
/// server:
///   bind_address: "127.0.0.1:8080"
/// database:
///   url: "postgres://localhost/records"
///   max_connections: 10
/// capabilities:
///   hr: true
///   project_management: true
/// ```
///
/// # Example
///
/// ```no_run
/// use records_console::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/console.yaml")?;
/// println!("Connecting to {}", loader.database().url);
/// # Ok::<(), records_console::error::ConsoleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ConsoleConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file and applies environment
    /// overrides (`DATABASE_URL`, `BIND_ADDRESS`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid configuration YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> ConsoleResult<Self> {
        let config = Self::load_yaml(path.as_ref())?;
        let config = Self::apply_overrides(config, |key| std::env::var(key).ok());
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ConsoleConfig) -> Self {
        Self { config }
    }

    fn load_yaml(path: &Path) -> ConsoleResult<ConsoleConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ConsoleError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConsoleError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn apply_overrides<F>(mut config: ConsoleConfig, lookup: F) -> ConsoleConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(DATABASE_URL_ENV).filter(|v| !v.is_empty()) {
            config.database.url = url;
        }
        if let Some(addr) = lookup(BIND_ADDRESS_ENV).filter(|v| !v.is_empty()) {
            config.server.bind_address = addr;
        }
        config
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the store settings.
    pub fn database(&self) -> &DatabaseConfig {
        &self.config.database
    }

    /// Returns the enabled table groups.
    pub fn capabilities(&self) -> Capabilities {
        self.config.capabilities
    }
}
