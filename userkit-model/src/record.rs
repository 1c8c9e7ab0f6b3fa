//! Whitelist projection for API responses.

use serde_json::{Map, Value};
use tracing::debug;

/// Fields a user record may carry in an API response.
pub const RESPONSE_FIELDS: [&str; 5] = ["id", "username", "email", "createdAt", "updatedAt"];

/// Copies only `allowed` keys out of `source`.
///
/// Missing keys are absent from the output rather than null. This is the
/// single projection primitive behind every whitelisting call site, so a
/// caller-supplied control key (`__proto__`, `constructor`, ...) can never
/// leak through a response shape or a merge.
#[must_use]
pub fn project(source: &Map<String, Value>, allowed: &[&str]) -> Map<String, Value> {
    let mut out = Map::new();
    for &key in allowed {
        if let Some(value) = source.get(key) {
            out.insert(key.to_string(), value.clone());
        }
    }
    let dropped = source
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .count();
    if dropped > 0 {
        debug!("projection dropped {dropped} unlisted key(s)");
    }
    out
}

/// Shapes a user record for an API response.
///
/// Keeps only [`RESPONSE_FIELDS`]; nested `profile`, `preferences`, and
/// `metadata` never pass through. Non-object input yields an empty object.
#[must_use]
pub fn format_user_data(user: &Value) -> Value {
    match user.as_object() {
        Some(fields) => Value::Object(project(fields, &RESPONSE_FIELDS)),
        None => Value::Object(Map::new()),
    }
}
