//! Post-migration verification battery
//!
//! Four independent checks run against the store after the load, using the
//! cleaned row count as ground truth. A failing check is a warning recorded
//! in the report; all four always run. Store errors are a different matter:
//! they mean the store stopped answering and are propagated as hard errors.

use crate::adapters::store::StoreClient;
use crate::core::verification::checksum::content_fingerprint;
use crate::core::verification::report::{DuplicateGroup, VerificationReport};
use crate::domain::{DateOrdering, PatientDocument, Result};
use std::collections::HashMap;
use std::time::Instant;

/// Verifier for post-migration validation
///
/// Never mutates the store; the report is its entire observable contract.
pub struct Verifier {
    sample_name: String,
}

impl Verifier {
    /// Create a new verifier with the configured sample-lookup name
    pub fn new(sample_name: impl Into<String>) -> Self {
        Self {
            sample_name: sample_name.into(),
        }
    }

    /// Run all four checks and assemble the report
    ///
    /// # Arguments
    ///
    /// * `expected_count` - the cleaned row set's row count (ground truth)
    /// * `store` - the shared store handle
    ///
    /// # Errors
    ///
    /// Returns an error only when the store itself fails mid-check; check
    /// failures never raise.
    pub async fn run(
        &self,
        expected_count: u64,
        store: &dyn StoreClient,
    ) -> Result<VerificationReport> {
        let start = Instant::now();
        let mut report = VerificationReport::new(expected_count, &self.sample_name);

        tracing::info!(expected_count, "Starting post-migration verification");

        // Check 1: count reconciliation
        report.stored_count = store.count_documents().await?;
        report.count_match = report.stored_count == expected_count;

        // Checks 2 and 3 both walk the stored documents
        let documents = store.fetch_all().await?;
        report.duplicate_groups = group_duplicates(&documents)?;

        for document in &documents {
            match document.date_ordering() {
                DateOrdering::Valid => {}
                DateOrdering::Invalid => report.invalid_date_count += 1,
                DateOrdering::Unorderable => report.unorderable_date_count += 1,
            }
        }

        // Check 4: sample lookup, informational only
        report.sample_found = store.find_by_name(&self.sample_name).await?.is_some();

        report.set_duration(start.elapsed().as_millis() as u64);
        report.log_summary();

        Ok(report)
    }
}

/// Group stored documents by content fingerprint, keeping groups of size > 1
///
/// Groups come back in first-occurrence order. The fingerprint is taken over
/// the canonicalized full field tuple, so two documents land in the same
/// group iff all their fields are equal.
fn group_duplicates(documents: &[PatientDocument]) -> Result<Vec<DuplicateGroup>> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, DuplicateGroup> = HashMap::new();

    for document in documents {
        let fingerprint = content_fingerprint(document)?;
        match groups.get_mut(&fingerprint) {
            Some(group) => group.count += 1,
            None => {
                order.push(fingerprint.clone());
                groups.insert(
                    fingerprint.clone(),
                    DuplicateGroup {
                        fingerprint,
                        representative: document.clone(),
                        count: 1,
                    },
                );
            }
        }
    }

    Ok(order
        .into_iter()
        .filter_map(|fingerprint| {
            groups
                .remove(&fingerprint)
                .filter(|group| group.count > 1)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AdmissionType, BloodType, Gender, TestResults};
    use chrono::NaiveDate;

    fn document(name: &str, room: u32) -> PatientDocument {
        PatientDocument {
            name: name.to_string(),
            age: 30,
            gender: Gender::Male,
            blood_type: BloodType::BNegative,
            medical_condition: "Cancer".to_string(),
            date_of_admission: NaiveDate::from_ymd_opt(2024, 1, 31),
            doctor: "Matthew Smith".to_string(),
            hospital: "Sons and Miller".to_string(),
            insurance_provider: "Blue Cross".to_string(),
            billing_amount: 18856.28,
            room_number: room,
            admission_type: AdmissionType::Urgent,
            discharge_date: NaiveDate::from_ymd_opt(2024, 2, 2),
            medication: "Paracetamol".to_string(),
            test_results: TestResults::Normal,
        }
    }

    #[test]
    fn test_group_duplicates_none() {
        let documents = vec![document("Alpha", 1), document("Beta", 2)];
        let groups = group_duplicates(&documents).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_group_duplicates_one_pair() {
        // Three documents, two field-for-field identical
        let documents = vec![
            document("Alpha", 1),
            document("Beta", 2),
            document("Alpha", 1),
        ];
        let groups = group_duplicates(&documents).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].representative.name, "Alpha");
    }

    #[test]
    fn test_group_duplicates_first_occurrence_order() {
        let documents = vec![
            document("Beta", 2),
            document("Alpha", 1),
            document("Beta", 2),
            document("Alpha", 1),
            document("Alpha", 1),
        ];
        let groups = group_duplicates(&documents).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].representative.name, "Beta");
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[1].representative.name, "Alpha");
        assert_eq!(groups[1].count, 3);
    }

    #[test]
    fn test_group_duplicates_near_identical_not_grouped() {
        let documents = vec![document("Alpha", 1), document("Alpha", 2)];
        let groups = group_duplicates(&documents).unwrap();
        assert!(groups.is_empty());
    }
}
