//! Import engine - validates spreadsheet rows and bulk-inserts the clean ones
//!
//! The run is split in two phases. Decoding and the header check either pass
//! or abort the whole import with no report. After that every row is checked
//! and the accepted rows go to storage in a single all-or-nothing batch.

use crate::adapters::database::traits::ClientStore;
use crate::config::ImportConfig;
use crate::core::import::report::{ImportReport, RowErrorDetail};
use crate::core::import::workbook::{cell_integer, CellInteger, ClientSheet, SheetRow};
use crate::domain::{Client, ClientFields, ClientbookError, CustomerId, Result};
use crate::{log_import_complete, log_import_start};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

/// Spreadsheet import engine
pub struct ImportEngine {
    store: Arc<dyn ClientStore + Send + Sync>,
    sheet_name: String,
}

impl ImportEngine {
    /// Create a new import engine
    pub fn new(store: Arc<dyn ClientStore + Send + Sync>, config: &ImportConfig) -> Self {
        Self {
            store,
            sheet_name: config.sheet_name.clone(),
        }
    }

    /// Sheet the engine reads rows from
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Import clients from spreadsheet bytes
    ///
    /// `source` only labels log events (file name or path).
    ///
    /// # Errors
    ///
    /// - `UnreadableFile` / `SchemaMismatch` when the file is rejected as a whole
    /// - `Database` / `DuplicateKey` when the batch insert fails; nothing is written
    pub async fn import(&self, source: &str, bytes: &[u8]) -> Result<ImportReport> {
        let start_time = Instant::now();
        log_import_start!(source, bytes.len());

        let sheet = ClientSheet::parse(bytes, &self.sheet_name)?;
        let existing = self.prefetch_existing_ids(&sheet).await?;

        let mut report = ImportReport::new(sheet.len());
        let mut seen = BTreeSet::new();
        let mut accepted = Vec::new();

        for row in sheet.rows() {
            match check_row(&row, &existing, &mut seen) {
                Ok(client) => accepted.push(client),
                Err(detail) => report.add_row_error(detail),
            }
        }

        let inserted = self.insert_accepted(&accepted).await?;
        let report = report.with_inserted(inserted);

        report.log_summary();
        log_import_complete!(
            report.summary.total_records,
            report.summary.inserted,
            report.summary.errors,
            start_time.elapsed()
        );

        Ok(report)
    }

    /// One storage round-trip for every id that parses
    async fn prefetch_existing_ids(&self, sheet: &ClientSheet) -> Result<BTreeSet<CustomerId>> {
        let candidates: BTreeSet<CustomerId> = sheet
            .rows()
            .filter_map(|row| match cell_integer(row.cell("customer_id")) {
                CellInteger::Value(id) => Some(CustomerId::new(id)),
                _ => None,
            })
            .collect();

        if candidates.is_empty() {
            return Ok(BTreeSet::new());
        }

        self.store.existing_ids_among(&candidates).await
    }

    async fn insert_accepted(&self, accepted: &[Client]) -> Result<usize> {
        if accepted.is_empty() {
            return Ok(0);
        }

        let inserted = self.store.insert_many(accepted).await?;
        if inserted != accepted.len() {
            return Err(ClientbookError::Database(format!(
                "Batch insert wrote {inserted} of {} accepted rows",
                accepted.len()
            )));
        }

        tracing::debug!(
            inserted,
            database = self.store.database_name(),
            "Accepted rows stored"
        );
        Ok(inserted)
    }
}

/// Check one row, returning the client to insert or every error found
fn check_row(
    row: &SheetRow<'_>,
    existing: &BTreeSet<CustomerId>,
    seen: &mut BTreeSet<CustomerId>,
) -> std::result::Result<Client, RowErrorDetail> {
    let mut errors = Vec::new();

    let mut customer_id = match cell_integer(row.cell("customer_id")) {
        CellInteger::Value(id) => Some(CustomerId::new(id)),
        CellInteger::Blank => {
            errors.push("customer_id is required".to_string());
            None
        }
        CellInteger::Invalid => {
            errors.push("customer_id must be an integer".to_string());
            None
        }
    };

    if let Some(id) = customer_id {
        if seen.contains(&id) {
            errors.push(format!("customer_id={id} is duplicated in the file"));
            customer_id = None;
        } else if existing.contains(&id) {
            errors.push(format!("customer_id={id} already exists in the database"));
        } else {
            seen.insert(id);
        }
    }

    let age = match cell_integer(row.cell("age")) {
        CellInteger::Blank => None,
        CellInteger::Value(value) => match i32::try_from(value) {
            Ok(age) => Some(age),
            Err(_) => {
                errors.push("age must be an integer".to_string());
                None
            }
        },
        CellInteger::Invalid => {
            errors.push("age must be an integer".to_string());
            None
        }
    };

    let fields = ClientFields {
        name: row.text("name"),
        email: row.text("email"),
        country: row.text("country"),
        age,
    };

    let fields = match fields.validated() {
        Ok(fields) => Some(fields),
        Err(ClientbookError::Validation(violations)) => {
            errors.extend(violations.iter().map(ToString::to_string));
            None
        }
        Err(other) => {
            errors.push(other.to_string());
            None
        }
    };

    match (customer_id, fields) {
        (Some(customer_id), Some(fields)) if errors.is_empty() => Ok(Client {
            customer_id,
            name: fields.name,
            email: fields.email,
            country: fields.country,
            age: fields.age,
        }),
        _ => Err(RowErrorDetail {
            customer_id,
            row_number: row.line,
            errors,
        }),
    }
}
