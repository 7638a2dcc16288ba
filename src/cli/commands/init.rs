//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "carelift.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing carelift configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Write to file
        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set MONGO_INITDB_ROOT_USERNAME and MONGO_INITDB_ROOT_PASSWORD");
                println!("     in the environment (or a .env file)");
                println!("  3. Validate configuration: carelift validate-config");
                println!("  4. Run the migration: carelift migrate");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# Carelift Configuration File
# Healthcare CSV to MongoDB migration tool
#
# The store host and port are fixed (mongodb:27017); credentials come from
# the MONGO_INITDB_ROOT_USERNAME / MONGO_INITDB_ROOT_PASSWORD environment
# variables.

[application]
log_level = "info"

[source]
path = "healthcare_dataset.csv"

[store]
database = "healthcare"
collection = "patients"

[verification]
enabled = true
sample_name = "Bobby Jackson"

[demo]
enabled = true

[logging]
local_enabled = false
local_path = "/var/log/carelift"
local_rotation = "daily"
local_max_size_mb = 100
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses() {
        let content = InitArgs::generate_config();
        let config: crate::config::CareliftConfig =
            toml::from_str(&content).expect("generated config must parse");
        assert!(config.validate().is_ok());
        assert_eq!(config.source.path, "healthcare_dataset.csv");
        assert_eq!(config.store.collection, "patients");
    }

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "carelift.toml".to_string(),
            force: false,
        };
        assert_eq!(args.output, "carelift.toml");
        assert!(!args.force);
    }
}
