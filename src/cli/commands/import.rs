//! Import command implementation
//!
//! Runs the spreadsheet import against a local file and prints the report.

use crate::adapters::database::create_client_store;
use crate::config::load_config;
use crate::core::ImportEngine;
use crate::domain::ClientbookError;
use crate::log_error_with_context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Spreadsheet to import (.xlsx, .xls or .ods)
    pub file: PathBuf,

    /// Override the sheet holding the client rows
    #[arg(long)]
    pub sheet: Option<String>,
}

impl ImportArgs {
    /// Execute the import command
    ///
    /// Exit codes: 0 every row imported, 1 some rows rejected, 2 configuration
    /// error, 3 file rejected as a whole.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(file = %self.file.display(), "Starting import command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        if let Some(sheet) = &self.sheet {
            config.import.sheet_name = sheet.clone();
        }

        let bytes = match std::fs::read(&self.file) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Cannot read {}: {e}", self.file.display());
                return Ok(3);
            }
        };

        let store = create_client_store(&config).await?;
        let engine = ImportEngine::new(store, &config.import);
        tracing::info!(sheet = engine.sheet_name(), "Reading client sheet");

        let source = self.file.display().to_string();
        match engine.import(&source, &bytes).await {
            Ok(report) => {
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(if report.is_clean() { 0 } else { 1 })
            }
            Err(e @ (ClientbookError::UnreadableFile(_) | ClientbookError::SchemaMismatch { .. })) => {
                log_error_with_context!(&e, "Spreadsheet rejected");
                eprintln!("Import rejected (sheet '{}'): {e}", engine.sheet_name());
                Ok(3)
            }
            Err(e) => Err(e.into()),
        }
    }
}
