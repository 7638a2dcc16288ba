//! Migrate command implementation
//!
//! This module implements the `migrate` command: read the source file,
//! clean it, bulk-load it into MongoDB, then run verification and the CRUD
//! demo when enabled.

use crate::config::load_config;
use crate::core::migrate::MigrationCoordinator;
use crate::domain::MigrateError;
use clap::Args;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Override the source file path
    #[arg(long)]
    pub source: Option<String>,

    /// Skip the post-load verification battery
    #[arg(long)]
    pub skip_verification: bool,

    /// Skip the CRUD demonstration
    #[arg(long)]
    pub skip_demo: bool,
}

impl MigrateArgs {
    /// Execute the migrate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting migrate command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(source) = &self.source {
            tracing::info!(source = %source, "Overriding source path from CLI");
            config.source.path = source.clone();
        }

        if self.skip_verification {
            tracing::info!("Disabling verification from CLI");
            config.verification.enabled = false;
        }

        if self.skip_demo {
            tracing::info!("Disabling CRUD demo from CLI");
            config.demo.enabled = false;
        }

        // Validate configuration
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        // Confirmation prompt (unless --yes)
        if !self.yes {
            println!("Migration Configuration:");
            println!("  Source: {}", config.source.path);
            println!("  Database: {}", config.store.database);
            println!("  Collection: {}", config.store.collection);
            println!("  Verification: {}", config.verification.enabled);
            println!("  CRUD demo: {}", config.demo.enabled);
            println!();
            print!("Proceed with migration? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Migration cancelled.");
                return Ok(0);
            }
        }

        // Connect to the store
        tracing::info!("Creating migration coordinator");
        let coordinator = match MigrationCoordinator::connect(config).await {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to connect to store");
                eprintln!("Failed to connect to MongoDB: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        // Execute migration
        println!("🚀 Starting migration...");
        println!();

        let summary = match coordinator.execute_migration().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Migration failed");
                eprintln!("Migration failed: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        // Display summary
        println!();
        print!("{}", summary.format_summary());

        if let Some(report) = &summary.verification {
            println!();
            print!("{}", report.format_summary());
        }

        println!();
        println!("✅ Migration completed successfully!");

        // Verification findings are warnings, not failures
        Ok(0)
    }
}

/// Map a fatal migration error to its process exit code
fn exit_code_for(error: &MigrateError) -> i32 {
    match error {
        MigrateError::Configuration(_) => 2,
        MigrateError::SourceRead(_) => 3,
        MigrateError::Connection(_) => 4,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_args_defaults() {
        let args = MigrateArgs {
            yes: false,
            source: None,
            skip_verification: false,
            skip_demo: false,
        };

        assert!(!args.yes);
        assert!(args.source.is_none());
        assert!(!args.skip_verification);
        assert!(!args.skip_demo);
    }

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            exit_code_for(&MigrateError::Configuration("bad".to_string())),
            2
        );
        assert_eq!(exit_code_for(&MigrateError::SourceRead("gone".to_string())), 3);
        assert_eq!(
            exit_code_for(&MigrateError::Connection("refused".to_string())),
            4
        );
        assert_eq!(exit_code_for(&MigrateError::Load("failed".to_string())), 5);
    }
}
