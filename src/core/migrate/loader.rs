//! Bulk loader for cleaned documents
//!
//! The load is at-least-attempted, not all-or-nothing: documents inserted
//! before a mid-batch failure remain persisted and are never rolled back.

use crate::adapters::store::StoreClient;
use crate::domain::{MigrateError, PatientDocument, Result};

/// Bulk-insert a cleaned row set into the store
///
/// An empty row set is a no-op, not an error: zero insert calls are made.
///
/// # Errors
///
/// Returns `MigrateError::Load` if the insert fails. The failure is fatal to
/// the run; whatever was inserted before it stays in the store.
pub async fn load(documents: &[PatientDocument], store: &dyn StoreClient) -> Result<usize> {
    if documents.is_empty() {
        tracing::info!("No documents to load, skipping insert");
        return Ok(0);
    }

    tracing::info!(count = documents.len(), "Inserting documents into store");

    let inserted = store
        .insert_many(documents)
        .await
        .map_err(|e| MigrateError::Load(e.to_string()))?;

    tracing::info!(inserted, "Documents inserted successfully");

    Ok(inserted)
}
