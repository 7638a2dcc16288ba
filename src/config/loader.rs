//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CareliftConfig;
use crate::domain::errors::MigrateError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file (a missing file yields the built-in defaults, so a
///    bare environment-configured run needs no file at all)
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CareliftConfig
/// 4. Applies environment variable overrides (CARELIFT_* prefix, plus the
///    MONGO_INITDB_ROOT_* credential variables)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, TOML parsing
/// fails, a referenced environment variable is missing, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use carelift::config::load_config;
///
/// let config = load_config("carelift.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CareliftConfig> {
    let path = path.as_ref();

    let mut config: CareliftConfig = if path.exists() {
        let contents = fs::read_to_string(path).map_err(|e| {
            MigrateError::Configuration(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let contents = substitute_env_vars(&contents)?;

        toml::from_str(&contents)
            .map_err(|e| MigrateError::Configuration(format!("Failed to parse TOML: {}", e)))?
    } else {
        tracing::debug!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        toml::from_str("").expect("empty config must parse to defaults")
    };

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        MigrateError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex must compile");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MigrateError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides
///
/// Store credentials use the conventional container-init names
/// (`MONGO_INITDB_ROOT_USERNAME`, `MONGO_INITDB_ROOT_PASSWORD`); everything
/// else follows the `CARELIFT_<SECTION>_<KEY>` pattern.
fn apply_env_overrides(config: &mut CareliftConfig) {
    if let Ok(val) = std::env::var("CARELIFT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("CARELIFT_SOURCE_PATH") {
        config.source.path = val;
    }

    // Store credentials
    if let Ok(val) = std::env::var("MONGO_INITDB_ROOT_USERNAME") {
        config.store.username = val;
    }
    if let Ok(val) = std::env::var("MONGO_INITDB_ROOT_PASSWORD") {
        config.store.password = crate::config::secret_string(val);
    }
    if let Ok(val) = std::env::var("CARELIFT_STORE_DATABASE") {
        config.store.database = val;
    }
    if let Ok(val) = std::env::var("CARELIFT_STORE_COLLECTION") {
        config.store.collection = val;
    }

    if let Ok(val) = std::env::var("CARELIFT_VERIFICATION_ENABLED") {
        config.verification.enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("CARELIFT_VERIFICATION_SAMPLE_NAME") {
        config.verification.sample_name = val;
    }

    if let Ok(val) = std::env::var("CARELIFT_DEMO_ENABLED") {
        config.demo.enabled = val.parse().unwrap_or(true);
    }

    if let Ok(val) = std::env::var("CARELIFT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CARELIFT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
