//! Core business logic for Clientbook.
//!
//! - [`service`] - Single-record create, read, update and delete
//! - [`import`] - Bulk import from a spreadsheet
//!
//! # Import Workflow
//!
//! 1. **Parse**: Decode the workbook and locate the client sheet
//! 2. **Check header**: The column set must match the client schema exactly
//! 3. **Prefetch**: Ask storage which of the file's ids already exist
//! 4. **Check rows**: Collect every error per row
//! 5. **Insert**: Store all clean rows in one transaction
//! 6. **Report**: Return counts and per-row errors
//!
//! # Example
//!
//! ```rust,no_run
//! use clientbook::adapters::database::create_client_store;
//! use clientbook::config::load_config;
//! use clientbook::core::import::ImportEngine;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("clientbook.toml")?;
//! let store = create_client_store(&config).await?;
//! let engine = ImportEngine::new(store, &config.import);
//!
//! let bytes = std::fs::read("clientes.xlsx")?;
//! let report = engine.import("clientes.xlsx", &bytes).await?;
//!
//! println!("Total: {}", report.summary.total_records);
//! println!("Inserted: {}", report.summary.inserted);
//! println!("Errors: {}", report.summary.errors);
//! # Ok(())
//! # }
//! ```

pub mod import;
pub mod service;

pub use import::{ImportEngine, ImportReport};
pub use service::ClientService;
