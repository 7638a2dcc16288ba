//! Migration run summary

use crate::core::clean::CleanSummary;
use crate::core::crud::CrudReport;
use crate::core::verification::VerificationReport;
use chrono::{DateTime, Utc};

/// Aggregate outcome of one migration run
///
/// Collects the cleaner's counts, the load result, and the optional
/// verification and CRUD demo outcomes into one printable record.
#[derive(Debug, Clone)]
pub struct MigrationSummary {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Rows read from the source file
    pub rows_read: usize,

    /// Counts from the cleaning pass
    pub clean: CleanSummary,

    /// Documents inserted into the store
    pub documents_loaded: usize,

    /// Verification outcome, if verification was enabled
    pub verification: Option<VerificationReport>,

    /// CRUD demo outcome, if the demo was enabled
    pub crud: Option<CrudReport>,

    /// Total run duration in milliseconds
    pub duration_ms: u64,
}

impl MigrationSummary {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            rows_read: 0,
            clean: CleanSummary::default(),
            documents_loaded: 0,
            verification: None,
            crud: None,
            duration_ms: 0,
        }
    }

    /// Format the summary as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("📊 Migration Summary\n");
        summary.push_str(&format!("  Started at: {}\n", self.started_at));
        summary.push_str(&format!("  Duration: {} ms\n", self.duration_ms));
        summary.push_str(&format!("  Rows read: {}\n", self.rows_read));
        summary.push_str(&format!(
            "  Duplicates removed: {}\n",
            self.clean.duplicates_removed
        ));
        summary.push_str(&format!(
            "  Documents loaded: {}\n",
            self.documents_loaded
        ));

        if let Some(report) = &self.verification {
            summary.push_str(&format!(
                "  Verification: {}\n",
                if report.is_clean() {
                    "✅ clean"
                } else {
                    "❌ issues found"
                }
            ));
        } else {
            summary.push_str("  Verification: skipped\n");
        }

        if let Some(crud) = &self.crud {
            summary.push_str(&format!(
                "  CRUD demo: {}\n",
                if crud.all_passed() {
                    "✅ all steps passed"
                } else {
                    "❌ some steps failed"
                }
            ));
        } else {
            summary.push_str("  CRUD demo: skipped\n");
        }

        summary
    }

    /// Log the summary at run completion
    pub fn log_summary(&self) {
        tracing::info!(
            rows_read = self.rows_read,
            duplicates_removed = self.clean.duplicates_removed,
            documents_loaded = self.documents_loaded,
            verified = self.verification.is_some(),
            crud_demo = self.crud.is_some(),
            duration_ms = self.duration_ms,
            "Migration completed"
        );
    }
}

impl Default for MigrationSummary {
    fn default() -> Self {
        Self::new()
    }
}
