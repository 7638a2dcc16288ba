//! # Carelift - Healthcare CSV to MongoDB Migration
//!
//! Carelift is a batch migration tool that reads a healthcare records CSV,
//! cleans it, bulk-loads it into MongoDB, and then verifies the loaded
//! collection against the cleaned row set.
//!
//! ## Overview
//!
//! One run performs, in order:
//! - **Read** the delimited source file into typed records
//! - **Clean** the row set (dedup, date parsing, name title-casing)
//! - **Load** the cleaned documents into MongoDB in one bulk insert
//! - **Verify** the collection: count reconciliation, duplicate grouping,
//!   date-order validation, and a sample lookup
//! - **Demonstrate** single-record CRUD against the live collection
//!
//! ## Architecture
//!
//! Carelift follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (clean, migrate, verification, crud)
//! - [`adapters`] - External integrations (CSV source, MongoDB store)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use carelift::config::load_config;
//! use carelift::core::migrate::MigrationCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("carelift.toml")?;
//!     let coordinator = MigrationCoordinator::connect(config).await?;
//!     let summary = coordinator.execute_migration().await?;
//!     println!("Loaded {} documents", summary.documents_loaded);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fatal conditions (unreadable source, unreachable store, failed bulk
//! insert) surface as [`domain::MigrateError`] values; data-quality findings
//! (duplicates in the store, invalid date ordering, missing sample) are
//! recorded in reports and logged, never raised:
//!
//! ```rust,no_run
//! use carelift::domain::MigrateError;
//!
//! fn example() -> Result<(), MigrateError> {
//!     let config = carelift::config::load_config("carelift.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Carelift uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting migration");
//! warn!(rows = 3, "Rows with unparseable dates");
//! error!(error = "connection refused", "Store unreachable");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
