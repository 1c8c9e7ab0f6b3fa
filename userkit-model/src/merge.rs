//! Whitelisted overlay of caller data onto immutable defaults.

use crate::record::project;
use serde_json::{json, Map, Value};
use std::sync::LazyLock;

/// Top-level keys a caller may override.
pub const TOP_LEVEL_FIELDS: [&str; 2] = ["role", "active"];
/// Recognized keys of the `preferences` section.
pub const PREFERENCE_FIELDS: [&str; 3] = ["theme", "notifications", "language"];
/// Recognized keys of the `metadata` section.
pub const METADATA_FIELDS: [&str; 3] = ["lastLogin", "loginCount", "createdBy"];

/// The fixed default record. Built once at first use, never mutated.
static USER_DEFAULTS: LazyLock<Map<String, Value>> = LazyLock::new(|| {
    let defaults = json!({
        "role": "user",
        "active": true,
        "preferences": {
            "theme": "light",
            "notifications": true,
            "language": "en"
        },
        "metadata": {
            "lastLogin": null,
            "loginCount": 0,
            "createdBy": "system"
        }
    });
    match defaults {
        Value::Object(fields) => fields,
        _ => unreachable!("defaults literal is an object"),
    }
});

/// Overlays whitelisted caller keys onto the fixed default record.
///
/// Only [`TOP_LEVEL_FIELDS`] are taken from the top level, and only each
/// section's recognized keys from the corresponding nested object (a
/// missing or non-object section counts as empty). Keys outside a
/// whitelist never reach the output at any nesting level, which is what
/// keeps `__proto__`-style control keys out of the merged record. Neither
/// `user_data` nor the defaults are mutated; the result is a fresh value.
#[must_use]
pub fn merge_user_defaults(user_data: &Value) -> Value {
    let empty = Map::new();
    let source = user_data.as_object().unwrap_or(&empty);

    let mut merged = USER_DEFAULTS.clone();
    for (key, value) in project(source, &TOP_LEVEL_FIELDS) {
        merged.insert(key, value);
    }
    overlay_section(&mut merged, source, "preferences", &PREFERENCE_FIELDS);
    overlay_section(&mut merged, source, "metadata", &METADATA_FIELDS);

    Value::Object(merged)
}

/// Overlays one nested section's whitelisted keys onto the merged record.
fn overlay_section(
    merged: &mut Map<String, Value>,
    source: &Map<String, Value>,
    section: &str,
    allowed: &[&str],
) {
    let Some(incoming) = source.get(section).and_then(Value::as_object) else {
        return;
    };
    if let Some(target) = merged.get_mut(section).and_then(Value::as_object_mut) {
        for (key, value) in project(incoming, allowed) {
            target.insert(key, value);
        }
    }
}
