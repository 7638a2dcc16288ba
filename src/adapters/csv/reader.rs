//! Record Source: CSV file ingestion
//!
//! Reads the whole source file into memory in row order. Scale is bounded by
//! design; a streaming source would slot in behind the same function
//! signature if that ever changes.

use crate::domain::{MigrateError, RawRecord, Result};
use std::path::Path;

/// Read all records from a delimited source file
///
/// The file must carry a header row naming the expected columns. Row order
/// is preserved.
///
/// # Errors
///
/// Returns `MigrateError::SourceRead` if the file is missing, the CSV is
/// malformed, or any field fails to parse into its declared type. Read
/// failures are fatal by design; there is nothing to migrate without a
/// readable source.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MigrateError::SourceRead(format!(
            "Source file not found: {}",
            path.display()
        )));
    }

    tracing::info!(path = %path.display(), "Loading healthcare records from CSV");

    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        MigrateError::SourceRead(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<RawRecord>().enumerate() {
        let record = row.map_err(|e| {
            // +2: one for the header row, one for 1-based line numbers
            MigrateError::SourceRead(format!("Row {}: {}", index + 2, e))
        })?;
        records.push(record);
    }

    tracing::info!(rows = records.len(), "Source file loaded");

    Ok(records)
}
