//! Configuration management for Clientbook.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Clientbook uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CLIENTBOOK_<SECTION>_<KEY>` overrides
//! - Default values for optional settings
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clientbook::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("clientbook.toml")?;
//!
//! println!("Listening on {}", config.server.bind_address());
//! println!("Import sheet: {}", config.import.sheet_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`ServerConfig`] - HTTP bind address
//! - [`PostgreSQLConfig`] - Connection string and pool settings
//! - [`ImportConfig`] - Sheet name and upload limit
//! - [`LoggingConfig`] - Local JSON log files
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//!
//! [postgresql]
//! connection_string = "${CLIENTBOOK_DATABASE_URL}"
//!
//! [import]
//! sheet_name = "Clientes"
//! max_file_size_mb = 10
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str};
pub use schema::{
    ApplicationConfig, ClientbookConfig, ImportConfig, LoggingConfig, PostgreSQLConfig,
    ServerConfig,
};
pub use secret::{redact_connection_string, secret_string, SecretString, SecretValue};
