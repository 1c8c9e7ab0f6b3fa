//! Normalization of externally sourced records.

use crate::merge::METADATA_FIELDS;
use crate::record::project;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use userkit_types::timestamp::format_instant;

/// Pass-through fields for an externally sourced record.
pub const EXTERNAL_FIELDS: [&str; 3] = ["id", "name", "email"];

/// Normalizes a batch of externally sourced records.
///
/// Returns an empty vector unless `data` is a JSON array. Equivalent to
/// [`process_external_data_at`] with `Utc::now()`.
#[must_use]
pub fn process_external_data(data: &Value) -> Vec<Value> {
    process_external_data_at(data, Utc::now())
}

/// Normalizes a batch against an explicit `processedAt` instant.
///
/// Each output record carries only [`EXTERNAL_FIELDS`], a `processedAt`
/// stamp, and a `metadata` object restricted to the recognized metadata
/// keys (missing or non-object source metadata counts as empty). Output
/// order matches input order; a non-object element fails soft to a record
/// carrying only the stamp and an empty `metadata`.
#[must_use]
pub fn process_external_data_at(data: &Value, now: DateTime<Utc>) -> Vec<Value> {
    let Some(items) = data.as_array() else {
        return Vec::new();
    };
    let stamp = format_instant(now);
    items
        .iter()
        .map(|item| normalize_record(item, &stamp))
        .collect()
}

fn normalize_record(item: &Value, stamp: &str) -> Value {
    let empty = Map::new();
    let source = item.as_object().unwrap_or(&empty);

    let mut record = project(source, &EXTERNAL_FIELDS);
    record.insert("processedAt".to_string(), Value::String(stamp.to_string()));

    let metadata = source
        .get("metadata")
        .and_then(Value::as_object)
        .map(|meta| project(meta, &METADATA_FIELDS))
        .unwrap_or_default();
    record.insert("metadata".to_string(), Value::Object(metadata));

    Value::Object(record)
}
