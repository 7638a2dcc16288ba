//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for carelift using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Carelift - Healthcare CSV to MongoDB migration tool
#[derive(Parser, Debug)]
#[command(name = "carelift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "carelift.toml", env = "CARELIFT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CARELIFT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean the source file and migrate it into MongoDB
    Migrate(commands::migrate::MigrateArgs),

    /// Run the verification battery against an already-loaded collection
    Verify(commands::verify::VerifyArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
