//! Migration coordinator
//!
//! Runs the end-to-end pipeline in a fixed order: read, clean, load,
//! verify, CRUD demo. Everything runs on the caller's task; there is no
//! internal concurrency, batching, or retry.

use crate::adapters::csv::read_records;
use crate::adapters::mongodb::MongoStore;
use crate::adapters::store::StoreClient;
use crate::config::CareliftConfig;
use crate::core::clean::clean;
use crate::core::crud::run_crud_demo;
use crate::core::migrate::loader::load;
use crate::core::migrate::summary::MigrationSummary;
use crate::core::verification::Verifier;
use crate::domain::Result;
use std::sync::Arc;
use std::time::Instant;

/// Coordinates a single migration run against one store handle
pub struct MigrationCoordinator {
    config: CareliftConfig,
    store: Arc<dyn StoreClient>,
}

impl MigrationCoordinator {
    /// Connect to the configured store and build a coordinator
    ///
    /// # Errors
    ///
    /// Returns `MigrateError::Connection` if the store is unreachable. The
    /// connection failure is fatal; nothing is read or cleaned before the
    /// store answers.
    pub async fn connect(config: CareliftConfig) -> Result<Self> {
        let store = MongoStore::connect(&config.store).await?;
        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }

    /// Build a coordinator around an existing store handle
    ///
    /// Used by tests to run the pipeline against an in-memory store.
    pub fn with_store(config: CareliftConfig, store: Arc<dyn StoreClient>) -> Self {
        Self { config, store }
    }

    /// Run the full pipeline
    ///
    /// # Errors
    ///
    /// Source read failures, load failures, and store errors abort the run.
    /// Verification findings and CRUD demo step failures do not; they are
    /// recorded in the summary.
    pub async fn execute_migration(&self) -> Result<MigrationSummary> {
        let start = Instant::now();
        let mut summary = MigrationSummary::new();

        tracing::info!(
            source = %self.config.source.path,
            database = %self.config.store.database,
            collection = %self.config.store.collection,
            "Starting migration"
        );

        // Read
        let rows = read_records(&self.config.source.path)?;
        summary.rows_read = rows.len();
        tracing::info!(rows = rows.len(), "Source file read");

        // Clean
        let (documents, clean_summary) = clean(rows)?;
        clean_summary.log_summary();
        summary.clean = clean_summary;

        // Load
        summary.documents_loaded = load(&documents, self.store.as_ref()).await?;

        // Verify
        if self.config.verification.enabled {
            let verifier = Verifier::new(&self.config.verification.sample_name);
            let report = verifier
                .run(documents.len() as u64, self.store.as_ref())
                .await?;
            summary.verification = Some(report);
        } else {
            tracing::info!("Verification disabled, skipping");
        }

        // CRUD demo
        if self.config.demo.enabled {
            summary.crud = Some(run_crud_demo(self.store.as_ref()).await);
        } else {
            tracing::info!("CRUD demo disabled, skipping");
        }

        summary.duration_ms = start.elapsed().as_millis() as u64;
        summary.log_summary();

        Ok(summary)
    }

    /// The shared store handle
    pub fn store(&self) -> Arc<dyn StoreClient> {
        Arc::clone(&self.store)
    }
}
