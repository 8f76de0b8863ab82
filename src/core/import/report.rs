//! Import summary and reporting
//!
//! This module defines the report returned by a spreadsheet import.

use crate::domain::CustomerId;
use serde::{Deserialize, Serialize};

/// Counters for one import run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Data rows in the sheet, header excluded
    pub total_records: usize,

    /// Rows written to storage
    pub inserted: usize,

    /// Rows with at least one error
    pub errors: usize,
}

/// Errors collected for a single spreadsheet row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowErrorDetail {
    /// Identifier parsed from the row, if it resolved
    pub customer_id: Option<CustomerId>,

    /// 1-based display line number (header is line 1)
    pub row_number: usize,

    /// Every problem found for the row, in check order
    pub errors: Vec<String>,
}

/// Result of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub summary: ImportSummary,
    pub error_details: Vec<RowErrorDetail>,
}

impl ImportReport {
    /// Create an empty report for a sheet with `total_records` data rows
    pub fn new(total_records: usize) -> Self {
        Self {
            summary: ImportSummary {
                total_records,
                ..ImportSummary::default()
            },
            error_details: Vec::new(),
        }
    }

    /// Record a failed row
    pub fn add_row_error(&mut self, detail: RowErrorDetail) {
        self.summary.errors += 1;
        self.error_details.push(detail);
    }

    /// Set the number of inserted rows
    pub fn with_inserted(mut self, inserted: usize) -> Self {
        self.summary.inserted = inserted;
        self
    }

    /// Check if every row was imported
    pub fn is_clean(&self) -> bool {
        self.error_details.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        if !self.is_clean() {
            tracing::warn!(
                error_rows = self.summary.errors,
                first_error_row = self.error_details.first().map(|d| d.row_number),
                "Import completed with row errors"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_row_errors() {
        let mut report = ImportReport::new(3);
        report.add_row_error(RowErrorDetail {
            customer_id: None,
            row_number: 3,
            errors: vec!["customer_id is required".to_string()],
        });
        let report = report.with_inserted(2);

        assert_eq!(report.summary.total_records, 3);
        assert_eq!(report.summary.inserted, 2);
        assert_eq!(report.summary.errors, 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_report_json_shape() {
        let mut report = ImportReport::new(1);
        report.add_row_error(RowErrorDetail {
            customer_id: Some(CustomerId::new(7)),
            row_number: 2,
            errors: vec!["age must be an integer".to_string()],
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["total_records"], 1);
        assert_eq!(json["summary"]["inserted"], 0);
        assert_eq!(json["summary"]["errors"], 1);
        assert_eq!(json["error_details"][0]["customer_id"], 7);
        assert_eq!(json["error_details"][0]["row_number"], 2);
    }

    #[test]
    fn test_unresolved_id_serializes_as_null() {
        let detail = RowErrorDetail {
            customer_id: None,
            row_number: 4,
            errors: vec!["customer_id is required".to_string()],
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert!(json["customer_id"].is_null());
    }
}
