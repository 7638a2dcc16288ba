//! Single-record CRUD demonstration
//!
//! A living contract example, not a reusable subsystem: once per run it
//! inserts a fixed document, reads it back by name, updates its discharge
//! date, and deletes it. The steps share only the intended key identity —
//! if the insert fails, the later steps naturally find nothing, which is an
//! acceptable outcome, not an error. No step failure blocks the next step.

use crate::adapters::store::StoreClient;
use crate::domain::{AdmissionType, BloodType, Gender, PatientDocument, TestResults};
use chrono::NaiveDate;

/// Name key shared by all four demo steps
pub const DEMO_NAME: &str = "John Doe";

/// Outcome of each CRUD demo step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrudReport {
    /// Insert succeeded
    pub inserted: bool,

    /// Read-back found the document
    pub read_back: bool,

    /// Update modified a document
    pub updated: bool,

    /// Delete removed a document
    pub deleted: bool,
}

impl CrudReport {
    /// True when all four steps succeeded
    pub fn all_passed(&self) -> bool {
        self.inserted && self.read_back && self.updated && self.deleted
    }
}

/// The fixed document the demo inserts
pub fn demo_document() -> PatientDocument {
    PatientDocument {
        name: DEMO_NAME.to_string(),
        age: 40,
        gender: Gender::Male,
        blood_type: BloodType::OPositive,
        medical_condition: "Hypertension".to_string(),
        date_of_admission: NaiveDate::from_ymd_opt(2024, 1, 1),
        doctor: "Alice Carter".to_string(),
        hospital: "Demo General".to_string(),
        insurance_provider: "Medicare".to_string(),
        billing_amount: 0.0,
        room_number: 1,
        admission_type: AdmissionType::Elective,
        discharge_date: NaiveDate::from_ymd_opt(2024, 1, 5),
        medication: "Lisinopril".to_string(),
        test_results: TestResults::Normal,
    }
}

/// Run the four CRUD steps against the store
///
/// Store errors are logged per step and recorded as step failures; the demo
/// itself never aborts the run.
pub async fn run_crud_demo(store: &dyn StoreClient) -> CrudReport {
    tracing::info!("Starting CRUD operation examples");
    let mut report = CrudReport::default();

    // Create
    match store.insert_one(&demo_document()).await {
        Ok(()) => {
            report.inserted = true;
            tracing::info!(name = DEMO_NAME, "Inserted demo record");
        }
        Err(e) => tracing::warn!(error = %e, "Demo insert failed"),
    }

    // Read
    match store.find_by_name(DEMO_NAME).await {
        Ok(Some(document)) => {
            report.read_back = true;
            tracing::info!(
                name = %document.name,
                discharge_date = ?document.discharge_date,
                "Queried demo record"
            );
        }
        Ok(None) => tracing::warn!(name = DEMO_NAME, "Demo record not found on read"),
        Err(e) => tracing::warn!(error = %e, "Demo read failed"),
    }

    // Update
    match update_demo_discharge(store).await {
        Ok(true) => {
            report.updated = true;
            tracing::info!(name = DEMO_NAME, "Updated demo record discharge date");
        }
        Ok(false) => tracing::warn!(name = DEMO_NAME, "Demo update matched no document"),
        Err(e) => tracing::warn!(error = %e, "Demo update failed"),
    }

    // Delete
    match store.delete_by_name(DEMO_NAME).await {
        Ok(true) => {
            report.deleted = true;
            tracing::info!(name = DEMO_NAME, "Deleted demo record");
        }
        Ok(false) => tracing::warn!(name = DEMO_NAME, "Demo delete matched no document"),
        Err(e) => tracing::warn!(error = %e, "Demo delete failed"),
    }

    tracing::info!(
        inserted = report.inserted,
        read_back = report.read_back,
        updated = report.updated,
        deleted = report.deleted,
        "CRUD demo completed"
    );

    report
}

async fn update_demo_discharge(
    store: &dyn StoreClient,
) -> crate::domain::Result<bool> {
    match NaiveDate::from_ymd_opt(2024, 1, 6) {
        Some(new_discharge) => store.update_discharge_date(DEMO_NAME, new_discharge).await,
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_document_identity() {
        let document = demo_document();
        assert_eq!(document.name, DEMO_NAME);
        assert_eq!(
            document.date_of_admission,
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(document.discharge_date, NaiveDate::from_ymd_opt(2024, 1, 5));
    }

    #[test]
    fn test_crud_report_all_passed() {
        let report = CrudReport {
            inserted: true,
            read_back: true,
            updated: true,
            deleted: true,
        };
        assert!(report.all_passed());

        let report = CrudReport {
            deleted: false,
            ..report
        };
        assert!(!report.all_passed());
    }
}
