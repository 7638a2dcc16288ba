//! Domain models and types for carelift.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Record models** ([`RawRecord`], [`PatientDocument`]) with the source
//!   column schema preserved through serde renames
//! - **Error types** ([`MigrateError`], [`StoreError`]) — hard failures only;
//!   soft anomalies live in component summaries and reports
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use carelift::domain::{MigrateError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;

pub use errors::{MigrateError, StoreError};
pub use record::{
    AdmissionType, BloodType, DateOrdering, Gender, PatientDocument, RawRecord, TestResults,
};
pub use result::Result;
