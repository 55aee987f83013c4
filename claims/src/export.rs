//! CSV export of the currently filtered and ranked claim view.
//!
//! Header columns are the keys of the first exported record, in backend
//! order. Cells containing a delimiter, quote, or line break are quoted per
//! RFC 4180; `null` and missing fields are written empty.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::format::display_value;
use crate::record::ClaimRecord;

/// Filename prefix for downloaded exports.
pub const EXPORT_PREFIX: &str = "claims_export_";

/// Serialize `records` as CSV text. Returns `None` when there is nothing to
/// export so callers can signal "no data" instead of writing an empty file.
#[must_use]
pub fn export_csv(records: &[&ClaimRecord]) -> Option<String> {
    let first = records.first()?;
    let headers: Vec<&str> = first.fields().keys().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(headers.iter().map(|h| escape_cell(h)).collect::<Vec<_>>().join(","));
    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|key| escape_cell(&record.get(key).map(display_value).unwrap_or_default()))
            .collect();
        lines.push(row.join(","));
    }
    Some(lines.join("\n"))
}

/// Quote a single cell when it would otherwise break the row structure.
#[must_use]
pub fn escape_cell(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}

/// Download filename for an export taken at `iso_timestamp`.
///
/// Keeps the first 19 characters of the ISO-8601 timestamp (seconds
/// precision, no zone) and strips colons so the name is valid on every
/// filesystem: `2026-10-16T09:05:00.000Z` becomes
/// `claims_export_2026-10-16T090500.csv`.
#[must_use]
pub fn export_filename(iso_timestamp: &str) -> String {
    let stamp: String = iso_timestamp.chars().take(19).filter(|c| *c != ':').collect();
    format!("{EXPORT_PREFIX}{stamp}.csv")
}
