//! Post-migration verification
//!
//! Count reconciliation, duplicate detection, date-order validation, and a
//! sample lookup, reported as structured data rather than raised as errors.

pub mod checksum;
pub mod report;
pub mod verify;

pub use report::{DuplicateGroup, VerificationReport};
pub use verify::Verifier;
