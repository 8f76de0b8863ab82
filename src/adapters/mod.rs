//! External system integrations for Clientbook.
//!
//! - [`database`] - Storage contract ([`database::ClientStore`]) and factory
//! - [`postgresql`] - PostgreSQL implementation
//!
//! # Design Pattern
//!
//! Adapters isolate the relational backend behind a trait so that the record
//! service and the import engine only depend on the storage contract.
//!
//! ```rust,no_run
//! use clientbook::adapters::database::ClientStore;
//! use clientbook::adapters::postgresql::{PostgreSQLAdapter, PostgreSQLClient};
//! use clientbook::config::{secret_string, schema::PostgreSQLConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PostgreSQLConfig {
//!     connection_string: secret_string("postgresql://clients:pw@localhost:5432/clients".to_string()),
//!     max_connections: 10,
//!     connection_timeout_seconds: 30,
//!     statement_timeout_seconds: 60,
//! };
//!
//! let store = PostgreSQLAdapter::new(PostgreSQLClient::new(config).await?);
//! store.ensure_schema().await?;
//! let clients = store.get_all().await?;
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod postgresql;
