//! Configuration types for the records console.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the console YAML file.

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the API binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

/// Store connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL, e.g. `postgres://localhost/records` or `sqlite::memory:`.
    pub url: String,
    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Seconds to wait when opening a connection.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Whether sqlx logs every statement.
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connect_timeout_secs: default_connect_timeout_secs(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    8
}

/// Optional table groups present in this deployment.
///
/// Operations consult these flags instead of probing for tables at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Hourly contracts, time entries and payroll history.
    #[serde(default = "enabled")]
    pub hr: bool,
    /// Project milestones.
    #[serde(default = "enabled")]
    pub project_management: bool,
}

impl Capabilities {
    /// Every table group enabled.
    pub fn all() -> Self {
        Self {
            hr: true,
            project_management: true,
        }
    }

    /// Only the core organizational tables.
    pub fn core_only() -> Self {
        Self {
            hr: false,
            project_management: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

fn enabled() -> bool {
    true
}

/// The complete console configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Store connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Optional table groups.
    #[serde(default)]
    pub capabilities: Capabilities,
}
