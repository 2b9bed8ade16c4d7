//! Configuration loading and management for the records console.
//!
//! This module loads the console configuration from a YAML file: server
//! bind address, store connection settings, and the capability flags that
//! say which optional table groups the deployment includes.
//!
//! # Example
//!
//! ```no_run
//! use records_console::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/console.yaml").unwrap();
//! println!("HR tables enabled: {}", config.capabilities().hr);
//! ```

mod loader;
mod types;

pub use loader::{BIND_ADDRESS_ENV, ConfigLoader, DATABASE_URL_ENV};
pub use types::{Capabilities, ConsoleConfig, DatabaseConfig, ServerConfig};
