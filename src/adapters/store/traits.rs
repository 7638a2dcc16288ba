//! Store abstraction trait
//!
//! This module defines the Store Handle seam: one explicit client object is
//! created per run and passed by reference to the loader, the verifier, and
//! the CRUD demo — there is no process-wide singleton. The trait also lets
//! tests run the whole pipeline against an in-memory store.

use crate::domain::{PatientDocument, Result};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Store client trait for patient document storage
///
/// All methods map to single store round trips. No method retries, batches,
/// or opens transactions; whatever atomicity the store provides per write is
/// all the pipeline relies on.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Test the store connection
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable.
    async fn ping(&self) -> Result<()>;

    /// Count all documents in the target collection
    async fn count_documents(&self) -> Result<u64>;

    /// Insert a batch of documents
    ///
    /// Documents inserted before a mid-batch failure remain persisted; the
    /// loader surfaces the failure without rolling anything back.
    ///
    /// # Returns
    ///
    /// The number of documents inserted.
    async fn insert_many(&self, documents: &[PatientDocument]) -> Result<usize>;

    /// Fetch every document in the collection, in store order
    ///
    /// Used by the verifier for duplicate grouping and date-order checks.
    async fn fetch_all(&self) -> Result<Vec<PatientDocument>>;

    /// Insert a single document
    async fn insert_one(&self, document: &PatientDocument) -> Result<()>;

    /// Find one document by its Name field
    async fn find_by_name(&self, name: &str) -> Result<Option<PatientDocument>>;

    /// Set the discharge date on the first document matching the name
    ///
    /// # Returns
    ///
    /// `true` if a document was modified.
    async fn update_discharge_date(&self, name: &str, discharge: NaiveDate) -> Result<bool>;

    /// Delete the first document matching the name
    ///
    /// # Returns
    ///
    /// `true` if a document was deleted.
    async fn delete_by_name(&self, name: &str) -> Result<bool>;
}
