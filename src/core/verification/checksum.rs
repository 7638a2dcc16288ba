//! Content fingerprints for duplicate detection
//!
//! Duplicate detection groups records by the full field tuple. Rather than
//! comparing tuples pairwise, each record gets a SHA-256 fingerprint over its
//! canonicalized JSON form; two records share a fingerprint iff all fields
//! are equal, so grouping by fingerprint is equivalent to grouping by the
//! tuple itself.

use crate::domain::{MigrateError, Result};
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Calculate the content fingerprint of any serializable record
///
/// # Returns
///
/// Returns a hex-encoded SHA-256 string (64 characters).
///
/// # Examples
///
/// ```
/// use carelift::core::verification::checksum::content_fingerprint;
///
/// let a = content_fingerprint(&serde_json::json!({"Name": "John Doe"})).unwrap();
/// let b = content_fingerprint(&serde_json::json!({"Name": "John Doe"})).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn content_fingerprint<T: Serialize>(record: &T) -> Result<String> {
    let value = serde_json::to_value(record)?;
    calculate_checksum(&value)
}

/// Calculate SHA-256 checksum of JSON data
///
/// Uses canonical JSON serialization to ensure consistent checksums
/// regardless of key ordering or whitespace differences.
pub fn calculate_checksum(data: &Value) -> Result<String> {
    let normalized = normalize_json(data);

    let data_str = serde_json::to_string(&normalized)
        .map_err(|e| MigrateError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(data_str.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{result:x}"))
}

/// Normalize JSON value to ensure consistent key ordering
///
/// This recursively sorts all object keys so that semantically identical
/// JSON produces the same checksum.
fn normalize_json(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut sorted: std::collections::BTreeMap<String, Value> =
                std::collections::BTreeMap::new();
            for (k, v) in map {
                sorted.insert(k.clone(), normalize_json(v));
            }
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(arr) => Value::Array(arr.iter().map(normalize_json).collect()),
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fingerprint_deterministic() {
        let data = json!({
            "Name": "Bobby Jackson",
            "Billing Amount": 18856.281306
        });

        let checksum1 = calculate_checksum(&data).unwrap();
        let checksum2 = calculate_checksum(&data).unwrap();

        assert_eq!(checksum1, checksum2);
        assert_eq!(checksum1.len(), 64);
    }

    #[test]
    fn test_fingerprint_differs_on_any_field() {
        let data1 = json!({"Name": "Bobby Jackson", "Room Number": 328});
        let data2 = json!({"Name": "Bobby Jackson", "Room Number": 329});

        let checksum1 = calculate_checksum(&data1).unwrap();
        let checksum2 = calculate_checksum(&data2).unwrap();

        assert_ne!(checksum1, checksum2);
    }

    #[test]
    fn test_fingerprint_key_order_independence() {
        let data1 = json!({"a": 1, "b": 2, "c": 3});
        let data2 = json!({"c": 3, "a": 1, "b": 2});

        let checksum1 = calculate_checksum(&data1).unwrap();
        let checksum2 = calculate_checksum(&data2).unwrap();

        assert_eq!(checksum1, checksum2);
    }

    #[test]
    fn test_fingerprint_is_hex() {
        let checksum = content_fingerprint(&json!({"test": "data"})).unwrap();
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_normalize_json_nested() {
        let data = json!({
            "outer": {"z": 1, "a": 2},
            "array": [{"b": 1, "a": 2}]
        });

        let normalized = super::normalize_json(&data);

        assert!(normalized.is_object());
        assert!(normalized["outer"].is_object());
        assert!(normalized["array"].is_array());
    }
}
