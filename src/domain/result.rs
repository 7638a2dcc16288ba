//! Result type alias for carelift
//!
//! This module provides a convenient Result type alias that uses MigrateError
//! as the error type.

use super::errors::MigrateError;

/// Result type alias for carelift operations
///
/// This is a convenience type alias that uses `MigrateError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use carelift::domain::result::Result;
/// use carelift::domain::errors::MigrateError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MigrateError::SourceRead("missing file".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MigrateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
        if let Ok(value) = result {
            assert_eq!(value, 42);
        }
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(MigrateError::Connection("unreachable".to_string()));
        assert!(result.is_err());
    }
}
