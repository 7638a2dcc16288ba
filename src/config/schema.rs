//! Configuration schema types
//!
//! This module defines the configuration structure for carelift. Store host
//! and port are deliberately not configurable; they are fixed constants in
//! the MongoDB adapter. Credentials come from the environment at load time.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main carelift configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Serialize, Deserialize)]
pub struct CareliftConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Source file settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Target store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Post-load verification settings
    #[serde(default)]
    pub verification: VerificationConfig,

    /// CRUD demo settings
    #[serde(default)]
    pub demo: DemoConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CareliftConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.source.validate()?;
        self.store.validate()?;
        self.verification.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Source file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the delimited source file (header row required)
    #[serde(default = "default_source_path")]
    pub path: String,
}

impl SourceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.is_empty() {
            return Err("source.path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_source_path(),
        }
    }
}

/// Target store configuration
///
/// Username and password are normally supplied through the
/// `MONGO_INITDB_ROOT_USERNAME` / `MONGO_INITDB_ROOT_PASSWORD` environment
/// variables; the defaults here mirror the documented fallbacks.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root username for authentication
    #[serde(default = "default_store_username")]
    pub username: String,

    /// Root password for authentication
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_store_password")]
    pub password: SecretString,

    /// Target database name
    #[serde(default = "default_database")]
    pub database: String,

    /// Target collection name
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl StoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.username.is_empty() {
            return Err("store.username cannot be empty".to_string());
        }
        if self.database.is_empty() {
            return Err("store.database cannot be empty".to_string());
        }
        if self.collection.is_empty() {
            return Err("store.collection cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            username: default_store_username(),
            password: default_store_password(),
            database: default_database(),
            collection: default_collection(),
        }
    }
}

/// Post-load verification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Run the verification battery after the load
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Name used for the sample-lookup check
    #[serde(default = "default_sample_name")]
    pub sample_name: String,
}

impl VerificationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.sample_name.is_empty() {
            return Err("verification.sample_name cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sample_name: default_sample_name(),
        }
    }
}

/// CRUD demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Run the single-record CRUD demonstration after verification
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging (console logging is always on)
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,

    /// Maximum log file size in MB
    #[serde(default = "default_local_max_size_mb")]
    pub local_max_size_mb: usize,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "size"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_max_size_mb == 0 {
            return Err("logging.local_max_size_mb must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
            local_max_size_mb: default_local_max_size_mb(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_source_path() -> String {
    "healthcare_dataset.csv".to_string()
}

fn default_store_username() -> String {
    "default_user".to_string()
}

fn default_store_password() -> SecretString {
    crate::config::secret_string("default_password".to_string())
}

fn default_database() -> String {
    "healthcare".to_string()
}

fn default_collection() -> String {
    "patients".to_string()
}

fn default_true() -> bool {
    true
}

fn default_sample_name() -> String {
    "Bobby Jackson".to_string()
}

fn default_local_path() -> String {
    "/var/log/carelift".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

fn default_local_max_size_mb() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig {
            log_level: "info".to_string(),
        };

        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_store_config_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.username, "default_user");
        assert_eq!(config.password.expose_secret(), "default_password");
        assert_eq!(config.database, "healthcare");
        assert_eq!(config.collection, "patients");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_store_config_rejects_empty_names() {
        let mut config = StoreConfig::default();
        config.database = String::new();
        assert!(config.validate().is_err());

        let mut config = StoreConfig::default();
        config.collection = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_verification_config_default() {
        let config = VerificationConfig::default();
        assert!(config.enabled);
        assert_eq!(config.sample_name, "Bobby Jackson");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_verification_config_empty_sample_name() {
        let config = VerificationConfig {
            enabled: true,
            sample_name: String::new(),
        };
        assert!(config.validate().is_err());

        // An empty sample name is fine when verification is disabled
        let config = VerificationConfig {
            enabled: false,
            sample_name: String::new(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_config_validation() {
        let config = LoggingConfig::default();
        assert!(!config.local_enabled);
        assert_eq!(config.local_rotation, "daily");
        assert!(config.validate().is_ok());

        let mut config = LoggingConfig::default();
        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        let mut config = LoggingConfig::default();
        config.local_max_size_mb = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_full_config_defaults_are_valid() {
        let config: CareliftConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.source.path, "healthcare_dataset.csv");
        assert!(config.demo.enabled);
    }
}
