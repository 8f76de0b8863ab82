//! Spreadsheet import
//!
//! - [`workbook`] - Decoding and header validation
//! - [`engine`] - Row checks and the bulk insert
//! - [`report`] - Per-run summary and row errors

pub mod engine;
pub mod report;
pub mod workbook;

pub use engine::ImportEngine;
pub use report::{ImportReport, ImportSummary, RowErrorDetail};
