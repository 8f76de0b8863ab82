//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output with configurable levels
//! - JSON-formatted local log files with rotation
//!
//! # Example
//!
//! ```no_run
//! use clientbook::logging::init_logging;
//! use clientbook::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a spreadsheet import
///
/// # Example
///
/// ```no_run
/// use clientbook::log_import_start;
///
/// log_import_start!("clientes.xlsx", 2048);
/// ```
#[macro_export]
macro_rules! log_import_start {
    ($source:expr, $size_bytes:expr) => {
        tracing::info!(
            source = %$source,
            size_bytes = $size_bytes,
            "Starting client import"
        );
    };
}

/// Log the completion of a spreadsheet import
///
/// # Example
///
/// ```no_run
/// use clientbook::log_import_complete;
/// use std::time::Duration;
///
/// log_import_complete!(3, 1, 2, Duration::from_millis(40));
/// ```
#[macro_export]
macro_rules! log_import_complete {
    ($total:expr, $inserted:expr, $errors:expr, $duration:expr) => {
        tracing::info!(
            total_records = $total,
            inserted = $inserted,
            errors = $errors,
            duration_ms = $duration.as_millis(),
            "Client import completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use clientbook::log_error_with_context;
/// use clientbook::domain::ClientbookError;
///
/// let error = ClientbookError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
