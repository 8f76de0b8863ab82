//! Domain error types
//!
//! This module defines the error hierarchy for Clientbook. Row-level import
//! problems are not errors: they are collected as data in the import report.
//! Everything here is a request-level failure that aborts the operation.

use crate::domain::ids::CustomerId;
use crate::domain::validation::FieldViolation;
use thiserror::Error;

/// Main Clientbook error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum ClientbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(String),

    /// Request rejected before any processing (bad file extension, malformed body)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The uploaded payload could not be decoded as a spreadsheet, or the
    /// expected sheet is absent
    #[error("Unreadable file: {0}")]
    UnreadableFile(String),

    /// The sheet header does not match the required column set
    #[error("{}", schema_mismatch_message(.missing, .unexpected))]
    SchemaMismatch {
        /// Required columns absent from the header
        missing: Vec<String>,
        /// Header columns that are not part of the record schema
        unexpected: Vec<String>,
    },

    /// One or more field rules failed for a candidate record
    #[error("{}", violations_message(.0))]
    Validation(Vec<FieldViolation>),

    /// A record with this identifier already exists
    #[error("A client with customer_id={0} already exists")]
    DuplicateKey(CustomerId),

    /// No record with this identifier exists
    #[error("Client with customer_id={0} not found")]
    NotFound(CustomerId),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

fn schema_mismatch_message(missing: &[String], unexpected: &[String]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("Missing columns: {}", missing.join(", ")));
    }
    if !unexpected.is_empty() {
        parts.push(format!("Unexpected columns: {}", unexpected.join(", ")));
    }
    if parts.is_empty() {
        return "Column set does not match the client schema".to_string();
    }
    parts.join(". ")
}

fn violations_message(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// Conversion from std::io::Error
impl From<std::io::Error> for ClientbookError {
    fn from(err: std::io::Error) -> Self {
        ClientbookError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ClientbookError {
    fn from(err: serde_json::Error) -> Self {
        ClientbookError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ClientbookError {
    fn from(err: toml::de::Error) -> Self {
        ClientbookError::Configuration(format!("TOML parse error: {err}"))
    }
}
