//! Configuration management for carelift.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`CARELIFT_*`, `MONGO_INITDB_ROOT_*`)
//! - Default values for every setting (a run with no config file is valid)
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use carelift::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("carelift.toml")?;
//!
//! println!("Source file: {}", config.source.path);
//! println!("Target: {}/{}", config.store.database, config.store.collection);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`SourceConfig`] - Source CSV file path
//! - [`StoreConfig`] - Store credentials and target database/collection
//! - [`VerificationConfig`] - Post-load verification settings
//! - [`DemoConfig`] - CRUD demo toggle
//! - [`LoggingConfig`] - File logging settings

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CareliftConfig, DemoConfig, LoggingConfig, SourceConfig, StoreConfig,
    VerificationConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
