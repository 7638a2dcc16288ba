//! Pre-load cleaning of the source row set
//!
//! The cleaner applies deterministic transformations in a fixed order; later
//! steps assume earlier ones completed:
//!
//! 1. Remove exact duplicates (first occurrence wins, source order kept)
//! 2. Parse date fields best-effort (unparseable becomes null, row kept)
//! 3. Title-case the Name field
//! 4. Flag, but never repair, invalid admission/discharge ordering
//!
//! Anomalies found here are counted in [`CleanSummary`] and logged; none of
//! them abort the run.

pub mod dedup;
pub mod normalize;

use crate::domain::{DateOrdering, PatientDocument, RawRecord, Result};

pub use dedup::dedup_records;
pub use normalize::{parse_date, title_case};

/// Counts reported by a cleaning pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanSummary {
    /// Rows read from the source before any cleaning
    pub rows_in: usize,

    /// Exact-duplicate rows removed
    pub duplicates_removed: usize,

    /// Admission dates that failed to parse and became null
    pub unparsed_admission_dates: usize,

    /// Discharge dates that failed to parse and became null
    pub unparsed_discharge_dates: usize,

    /// Rows with both dates present where discharge <= admission
    pub invalid_date_rows: usize,

    /// Rows where either date is null, so the pair cannot be compared
    pub unorderable_date_rows: usize,
}

impl CleanSummary {
    /// Rows remaining after deduplication
    pub fn rows_out(&self) -> usize {
        self.rows_in - self.duplicates_removed
    }

    /// Log the summary at the cleaner's completion
    pub fn log_summary(&self) {
        tracing::info!(
            rows_in = self.rows_in,
            rows_out = self.rows_out(),
            duplicates_removed = self.duplicates_removed,
            "Cleaning completed"
        );

        if self.unparsed_admission_dates > 0 || self.unparsed_discharge_dates > 0 {
            tracing::warn!(
                unparsed_admission_dates = self.unparsed_admission_dates,
                unparsed_discharge_dates = self.unparsed_discharge_dates,
                "Some date values could not be parsed and were set to null"
            );
        }

        if self.invalid_date_rows > 0 {
            tracing::warn!(
                invalid_date_rows = self.invalid_date_rows,
                "Rows with discharge date on or before admission date (kept as-is)"
            );
        }

        if self.unorderable_date_rows > 0 {
            tracing::warn!(
                unorderable_date_rows = self.unorderable_date_rows,
                "Rows whose date ordering cannot be checked (missing date)"
            );
        }
    }
}

/// Run the full cleaning pass over a row set
///
/// Returns the cleaned documents, in source order, along with the summary of
/// what was removed, coerced, or flagged.
pub fn clean(mut rows: Vec<RawRecord>) -> Result<(Vec<PatientDocument>, CleanSummary)> {
    let mut summary = CleanSummary {
        rows_in: rows.len(),
        ..CleanSummary::default()
    };

    tracing::info!(rows = rows.len(), "Checking for duplicate rows");
    summary.duplicates_removed = dedup_records(&mut rows)?;
    tracing::info!(
        duplicates_removed = summary.duplicates_removed,
        "Duplicate rows removed"
    );

    tracing::info!("Converting date columns and normalizing names");
    let mut documents = Vec::with_capacity(rows.len());
    for row in rows {
        let date_of_admission = parse_date(&row.date_of_admission);
        if date_of_admission.is_none() {
            summary.unparsed_admission_dates += 1;
            tracing::debug!(
                value = %row.date_of_admission,
                "Unparseable admission date set to null"
            );
        }

        let discharge_date = parse_date(&row.discharge_date);
        if discharge_date.is_none() {
            summary.unparsed_discharge_dates += 1;
            tracing::debug!(
                value = %row.discharge_date,
                "Unparseable discharge date set to null"
            );
        }

        documents.push(PatientDocument {
            name: title_case(&row.name),
            age: row.age,
            gender: row.gender,
            blood_type: row.blood_type,
            medical_condition: row.medical_condition,
            date_of_admission,
            doctor: row.doctor,
            hospital: row.hospital,
            insurance_provider: row.insurance_provider,
            billing_amount: row.billing_amount,
            room_number: row.room_number,
            admission_type: row.admission_type,
            discharge_date,
            medication: row.medication,
            test_results: row.test_results,
        });
    }

    tracing::info!("Checking for invalid date entries");
    for document in &documents {
        match document.date_ordering() {
            DateOrdering::Valid => {}
            DateOrdering::Invalid => summary.invalid_date_rows += 1,
            DateOrdering::Unorderable => summary.unorderable_date_rows += 1,
        }
    }

    summary.log_summary();

    Ok((documents, summary))
}
