//! Domain error types
//!
//! Hard failures only: anything that may abort the run lives here. Soft
//! anomalies (unparseable dates, verification findings, demo CRUD step
//! failures) are accumulated into summaries and reports instead — the two
//! mechanisms are deliberately kept separate.

use thiserror::Error;

/// Main carelift error type
///
/// This is the primary error type used throughout the application.
/// Only connection and load failures are expected to terminate a run;
/// everything else is counted and logged by the component that saw it.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Source file errors (missing, malformed, unparseable fields)
    #[error("Source read error: {0}")]
    SourceRead(String),

    /// Store connection errors
    #[error("Connection error: {0}")]
    Connection(String),

    /// Bulk load errors (documents inserted before the failure remain)
    #[error("Load error: {0}")]
    Load(String),

    /// Store operation errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Store-specific errors
///
/// Errors raised by the document store adapter. These don't expose
/// driver types, so callers and tests never depend on the MongoDB SDK.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect to the store
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Failed to insert documents
    #[error("Failed to insert documents: {0}")]
    InsertFailed(String),

    /// Failed to query documents
    #[error("Failed to query documents: {0}")]
    QueryFailed(String),

    /// Failed to count documents
    #[error("Failed to count documents: {0}")]
    CountFailed(String),

    /// Failed to update a document
    #[error("Failed to update document: {0}")]
    UpdateFailed(String),

    /// Failed to delete a document
    #[error("Failed to delete document: {0}")]
    DeleteFailed(String),

    /// Failed to deserialize a stored document
    #[error("Failed to deserialize document: {0}")]
    DeserializationFailed(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for MigrateError {
    fn from(err: std::io::Error) -> Self {
        MigrateError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MigrateError {
    fn from(err: serde_json::Error) -> Self {
        MigrateError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MigrateError {
    fn from(err: toml::de::Error) -> Self {
        MigrateError::Configuration(format!("TOML parse error: {err}"))
    }
}

// CSV reader failures are source-read failures by definition
impl From<csv::Error> for MigrateError {
    fn from(err: csv::Error) -> Self {
        MigrateError::SourceRead(err.to_string())
    }
}
