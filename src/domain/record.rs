//! Patient record domain models
//!
//! Two shapes of the same record move through the pipeline:
//!
//! - [`RawRecord`] is a row exactly as read from the source CSV. Date fields
//!   stay textual because parsing them is a cleaning step with best-effort
//!   semantics, not a read-time contract.
//! - [`PatientDocument`] is the cleaned, stored form: dates parsed into
//!   `Option<NaiveDate>` (unparseable becomes `None`, the row is kept) and
//!   the name title-cased.
//!
//! Serde renames map every field to the source column names, so stored
//! documents keep the original schema.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient gender as recorded in the source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// ABO/Rh blood type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

/// How the patient was admitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdmissionType {
    Emergency,
    Elective,
    Urgent,
}

/// Outcome category of the patient's tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestResults {
    Normal,
    Abnormal,
    Inconclusive,
}

/// One patient record as read from the source CSV, dates still raw text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Age")]
    pub age: u32,

    #[serde(rename = "Gender")]
    pub gender: Gender,

    #[serde(rename = "Blood Type")]
    pub blood_type: BloodType,

    #[serde(rename = "Medical Condition")]
    pub medical_condition: String,

    /// Source-textual admission date, parsed during cleaning
    #[serde(rename = "Date of Admission")]
    pub date_of_admission: String,

    #[serde(rename = "Doctor")]
    pub doctor: String,

    #[serde(rename = "Hospital")]
    pub hospital: String,

    #[serde(rename = "Insurance Provider")]
    pub insurance_provider: String,

    #[serde(rename = "Billing Amount")]
    pub billing_amount: f64,

    #[serde(rename = "Room Number")]
    pub room_number: u32,

    #[serde(rename = "Admission Type")]
    pub admission_type: AdmissionType,

    /// Source-textual discharge date, parsed during cleaning
    #[serde(rename = "Discharge Date")]
    pub discharge_date: String,

    #[serde(rename = "Medication")]
    pub medication: String,

    #[serde(rename = "Test Results")]
    pub test_results: TestResults,
}

/// The persisted form of a patient record
///
/// Created by the cleaner, bulk-inserted by the loader, and read back by the
/// verifier and the CRUD demo. The store enforces no schema; this type is the
/// only schema the pipeline knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientDocument {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Age")]
    pub age: u32,

    #[serde(rename = "Gender")]
    pub gender: Gender,

    #[serde(rename = "Blood Type")]
    pub blood_type: BloodType,

    #[serde(rename = "Medical Condition")]
    pub medical_condition: String,

    /// `None` when the source value could not be parsed
    #[serde(rename = "Date of Admission")]
    pub date_of_admission: Option<NaiveDate>,

    #[serde(rename = "Doctor")]
    pub doctor: String,

    #[serde(rename = "Hospital")]
    pub hospital: String,

    #[serde(rename = "Insurance Provider")]
    pub insurance_provider: String,

    #[serde(rename = "Billing Amount")]
    pub billing_amount: f64,

    #[serde(rename = "Room Number")]
    pub room_number: u32,

    #[serde(rename = "Admission Type")]
    pub admission_type: AdmissionType,

    /// `None` when the source value could not be parsed
    #[serde(rename = "Discharge Date")]
    pub discharge_date: Option<NaiveDate>,

    #[serde(rename = "Medication")]
    pub medication: String,

    #[serde(rename = "Test Results")]
    pub test_results: TestResults,
}

/// How a document's admission/discharge dates relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrdering {
    /// Discharge strictly after admission
    Valid,
    /// Discharge on or before admission
    Invalid,
    /// Either date is absent, so the pair cannot be compared
    Unorderable,
}

impl PatientDocument {
    /// Classify the admission/discharge ordering of this document
    ///
    /// Absent dates are never counted as valid or invalid; they are a
    /// distinct "cannot compare" category reported separately.
    pub fn date_ordering(&self) -> DateOrdering {
        match (self.date_of_admission, self.discharge_date) {
            (Some(admitted), Some(discharged)) => {
                if discharged > admitted {
                    DateOrdering::Valid
                } else {
                    DateOrdering::Invalid
                }
            }
            _ => DateOrdering::Unorderable,
        }
    }
}
