//! Exact-duplicate removal
//!
//! A row is a duplicate iff every field equals an earlier row's fields.
//! The first occurrence wins and surviving rows keep their source order.

use crate::core::verification::checksum::content_fingerprint;
use crate::domain::{RawRecord, Result};
use std::collections::HashSet;

/// Remove exact duplicates from the row set in place
///
/// Returns the number of rows removed. Running this on already-deduplicated
/// input removes nothing, so the operation is idempotent.
pub fn dedup_records(records: &mut Vec<RawRecord>) -> Result<usize> {
    let before = records.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(before);

    let mut keep = Vec::with_capacity(before);
    for record in records.iter() {
        keep.push(seen.insert(content_fingerprint(record)?));
    }

    let mut keep_iter = keep.into_iter();
    records.retain(|_| keep_iter.next().unwrap_or(false));

    Ok(before - records.len())
}
