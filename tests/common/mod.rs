//! Shared test fixtures
//!
//! `MemoryStore` is an in-memory `StoreClient` used to run the pipeline
//! without a MongoDB server.

use async_trait::async_trait;
use carelift::adapters::store::StoreClient;
use carelift::domain::{
    AdmissionType, BloodType, Gender, PatientDocument, Result, StoreError, TestResults,
};
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory store used to exercise the pipeline in tests
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<Vec<PatientDocument>>,
    insert_calls: AtomicUsize,
    fail_inserts: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose insert operations always fail
    pub fn failing() -> Self {
        Self {
            fail_inserts: true,
            ..Self::default()
        }
    }

    /// How many insert round trips were made (bulk and single both count)
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn documents(&self) -> Vec<PatientDocument> {
        self.documents.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreClient for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn count_documents(&self) -> Result<u64> {
        Ok(self.documents.lock().unwrap().len() as u64)
    }

    async fn insert_many(&self, documents: &[PatientDocument]) -> Result<usize> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_inserts {
            return Err(StoreError::InsertFailed("simulated failure".to_string()).into());
        }
        self.documents
            .lock()
            .unwrap()
            .extend(documents.iter().cloned());
        Ok(documents.len())
    }

    async fn fetch_all(&self) -> Result<Vec<PatientDocument>> {
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn insert_one(&self, document: &PatientDocument) -> Result<()> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_inserts {
            return Err(StoreError::InsertFailed("simulated failure".to_string()).into());
        }
        self.documents.lock().unwrap().push(document.clone());
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<PatientDocument>> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.name == name)
            .cloned())
    }

    async fn update_discharge_date(&self, name: &str, discharge: NaiveDate) -> Result<bool> {
        let mut documents = self.documents.lock().unwrap();
        match documents.iter_mut().find(|d| d.name == name) {
            Some(document) => {
                document.discharge_date = Some(discharge);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool> {
        let mut documents = self.documents.lock().unwrap();
        match documents.iter().position(|d| d.name == name) {
            Some(index) => {
                documents.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// A patient document with distinguishing name and room number
pub fn patient(name: &str, room_number: u32) -> PatientDocument {
    PatientDocument {
        name: name.to_string(),
        age: 45,
        gender: Gender::Female,
        blood_type: BloodType::ONegative,
        medical_condition: "Diabetes".to_string(),
        date_of_admission: NaiveDate::from_ymd_opt(2024, 3, 10),
        doctor: "Maria Lopez".to_string(),
        hospital: "Northside Medical".to_string(),
        insurance_provider: "Aetna".to_string(),
        billing_amount: 9876.54,
        room_number,
        admission_type: AdmissionType::Emergency,
        discharge_date: NaiveDate::from_ymd_opt(2024, 3, 15),
        medication: "Metformin".to_string(),
        test_results: TestResults::Abnormal,
    }
}
