//! CSV export.
//!
//! The export format is intentionally dumb: the header row is the key
//! set of the first record, and every cell is the JSON encoding of its
//! value. JSON-encoding the cells means embedded commas, quotes, and
//! newlines arrive already escaped without a CSV-quoting pass of our own.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    /// There were no records to export.
    #[error("nothing to export")]
    Empty,

    /// A record did not serialize to a JSON object.
    #[error("records must serialize to objects")]
    NotAnObject,

    /// A record failed to serialize at all.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Render a collection as CSV.
///
/// Column order follows the first record's keys; a key missing from a
/// later record becomes a `null` cell.
///
/// # Errors
///
/// Returns [`ExportError::Empty`] for an empty slice,
/// [`ExportError::NotAnObject`] when a record serializes to something
/// other than a JSON object, or a serialization error.
pub fn to_csv<T: Serialize>(records: &[T]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }

    let values: Vec<serde_json::Value> = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<_, _>>()?;

    let headers: Vec<String> = values
        .first()
        .and_then(serde_json::Value::as_object)
        .ok_or(ExportError::NotAnObject)?
        .keys()
        .cloned()
        .collect();

    let mut out = headers.join(",");
    out.push('\n');

    for value in &values {
        let object = value.as_object().ok_or(ExportError::NotAnObject)?;
        let row: Vec<String> = headers
            .iter()
            .map(|key| {
                object
                    .get(key)
                    .unwrap_or(&serde_json::Value::Null)
                    .to_string()
            })
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    Ok(out)
}
