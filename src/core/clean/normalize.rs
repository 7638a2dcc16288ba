//! Field normalization: best-effort date parsing and name title-casing

use chrono::NaiveDate;

/// Date formats accepted from the source file, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %B %Y", "%B %d, %Y"];

/// Parse a source date value into a canonical date, best effort
///
/// A value that matches none of the accepted formats becomes `None` rather
/// than an error: a single malformed row must not abort the pipeline. The
/// caller counts the misses.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Rewrite a name to title case
///
/// Locale-independent rule: an alphabetic character is uppercased when the
/// preceding character is not alphabetic, and lowercased otherwise. This
/// capitalizes after spaces, hyphens, and apostrophes alike, and is
/// idempotent and case-insensitive on input.
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_alphabetic = false;

    for ch in name.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            result.push(ch);
            prev_alphabetic = false;
        }
    }

    result
}
