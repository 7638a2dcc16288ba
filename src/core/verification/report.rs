//! Verification report structures
//!
//! The report is the verifier's entire observable contract: every check
//! lands here as data, warnings included, and nothing in the report ever
//! changes the process exit code.

use crate::domain::PatientDocument;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A group of stored documents sharing identical values across all fields
///
/// Any group with `count > 1` indicates a load-time duplication defect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Content fingerprint shared by every document in the group
    pub fingerprint: String,

    /// One representative document from the group
    pub representative: PatientDocument,

    /// How many stored documents share the fingerprint
    pub count: usize,
}

/// Result of the post-migration verification battery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// When the verification was performed
    pub verified_at: DateTime<Utc>,

    /// Cleaned row count used as ground truth
    pub expected_count: u64,

    /// Documents counted in the store
    pub stored_count: u64,

    /// Whether stored count equals the expected count exactly
    pub count_match: bool,

    /// Duplicate groups in first-occurrence order
    pub duplicate_groups: Vec<DuplicateGroup>,

    /// Stored documents where admission date is after discharge date
    pub invalid_date_count: usize,

    /// Stored documents where either date is null (cannot compare)
    pub unorderable_date_count: usize,

    /// Name used for the sample lookup
    pub sample_name: String,

    /// Whether the sample lookup found a document (reported, not pass/fail)
    pub sample_found: bool,

    /// Duration of verification in milliseconds
    pub duration_ms: u64,
}

impl VerificationReport {
    /// Create a report seeded with the expected count
    pub fn new(expected_count: u64, sample_name: impl Into<String>) -> Self {
        Self {
            verified_at: Utc::now(),
            expected_count,
            stored_count: 0,
            count_match: false,
            duplicate_groups: Vec::new(),
            invalid_date_count: 0,
            unorderable_date_count: 0,
            sample_name: sample_name.into(),
            sample_found: false,
            duration_ms: 0,
        }
    }

    /// Set the duration of verification
    pub fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    /// True when every hard check passed
    ///
    /// The sample lookup is informational and does not affect cleanliness.
    pub fn is_clean(&self) -> bool {
        self.count_match && self.duplicate_groups.is_empty() && self.invalid_date_count == 0
    }

    /// Format the report as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("📊 Verification Report\n");
        summary.push_str(&format!("  Verified at: {}\n", self.verified_at));
        summary.push_str(&format!("  Duration: {} ms\n", self.duration_ms));
        summary.push_str(&format!(
            "  Count reconciliation: {} expected, {} stored — {}\n",
            self.expected_count,
            self.stored_count,
            if self.count_match { "✅ match" } else { "❌ mismatch" }
        ));
        summary.push_str(&format!(
            "  Duplicate groups: {}\n",
            if self.duplicate_groups.is_empty() {
                "✅ none".to_string()
            } else {
                format!("❌ {}", self.duplicate_groups.len())
            }
        ));
        summary.push_str(&format!(
            "  Invalid date ordering: {}\n",
            if self.invalid_date_count == 0 {
                "✅ none".to_string()
            } else {
                format!("❌ {}", self.invalid_date_count)
            }
        ));
        summary.push_str(&format!(
            "  Unorderable dates: {}\n",
            self.unorderable_date_count
        ));
        summary.push_str(&format!(
            "  Sample lookup ('{}'): {}\n",
            self.sample_name,
            if self.sample_found { "found" } else { "not found" }
        ));

        if !self.duplicate_groups.is_empty() {
            summary.push_str("\n❌ Duplicate groups:\n");
            for (i, group) in self.duplicate_groups.iter().enumerate() {
                summary.push_str(&format!(
                    "  {}. {} × '{}' ({}...)\n",
                    i + 1,
                    group.count,
                    group.representative.name,
                    &group.fingerprint[..12]
                ));
            }
        }

        summary
    }

    /// Log the report, warnings for every failed check
    pub fn log_summary(&self) {
        tracing::info!(
            expected = self.expected_count,
            stored = self.stored_count,
            count_match = self.count_match,
            duplicate_groups = self.duplicate_groups.len(),
            invalid_dates = self.invalid_date_count,
            unorderable_dates = self.unorderable_date_count,
            sample_found = self.sample_found,
            duration_ms = self.duration_ms,
            "Verification completed"
        );

        if !self.count_match {
            tracing::warn!(
                expected = self.expected_count,
                stored = self.stored_count,
                "Stored document count does not match cleaned row count"
            );
        }
        if !self.duplicate_groups.is_empty() {
            tracing::warn!(
                groups = self.duplicate_groups.len(),
                "Duplicate documents found in store"
            );
        }
        if self.invalid_date_count > 0 {
            tracing::warn!(
                count = self.invalid_date_count,
                "Stored documents with admission date after discharge date"
            );
        }
        if !self.sample_found {
            tracing::warn!(
                sample_name = %self.sample_name,
                "Sample lookup returned no document"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AdmissionType, BloodType, Gender, TestResults};

    fn representative() -> PatientDocument {
        PatientDocument {
            name: "Bobby Jackson".to_string(),
            age: 30,
            gender: Gender::Male,
            blood_type: BloodType::BNegative,
            medical_condition: "Cancer".to_string(),
            date_of_admission: chrono::NaiveDate::from_ymd_opt(2024, 1, 31),
            doctor: "Matthew Smith".to_string(),
            hospital: "Sons and Miller".to_string(),
            insurance_provider: "Blue Cross".to_string(),
            billing_amount: 18856.28,
            room_number: 328,
            admission_type: AdmissionType::Urgent,
            discharge_date: chrono::NaiveDate::from_ymd_opt(2024, 2, 2),
            medication: "Paracetamol".to_string(),
            test_results: TestResults::Normal,
        }
    }

    #[test]
    fn test_new_report_is_not_clean() {
        let report = VerificationReport::new(100, "Bobby Jackson");
        assert_eq!(report.expected_count, 100);
        assert!(!report.count_match);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_is_clean_when_all_checks_pass() {
        let mut report = VerificationReport::new(100, "Bobby Jackson");
        report.stored_count = 100;
        report.count_match = true;
        assert!(report.is_clean());
    }

    #[test]
    fn test_sample_lookup_does_not_affect_cleanliness() {
        let mut report = VerificationReport::new(100, "Bobby Jackson");
        report.stored_count = 100;
        report.count_match = true;
        report.sample_found = false;
        assert!(report.is_clean());
    }

    #[test]
    fn test_duplicates_make_report_dirty() {
        let mut report = VerificationReport::new(2, "Bobby Jackson");
        report.stored_count = 2;
        report.count_match = true;
        report.duplicate_groups.push(DuplicateGroup {
            fingerprint: "ab".repeat(32),
            representative: representative(),
            count: 2,
        });
        assert!(!report.is_clean());
    }

    #[test]
    fn test_format_summary() {
        let mut report = VerificationReport::new(98, "Bobby Jackson");
        report.stored_count = 98;
        report.count_match = true;
        report.set_duration(1500);

        let summary = report.format_summary();
        assert!(summary.contains("98 expected, 98 stored"));
        assert!(summary.contains("match"));
        assert!(summary.contains("Duration: 1500 ms"));
        assert!(summary.contains("Bobby Jackson"));
    }
}
