//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - console output, always on
//! - JSON-formatted local file logs with rotation, opt-in
//! - configurable log levels
//!
//! # Example
//!
//! ```no_run
//! use carelift::logging::init_logging;
//! use carelift::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use carelift::log_error_with_context;
/// use carelift::domain::MigrateError;
///
/// let error = MigrateError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
