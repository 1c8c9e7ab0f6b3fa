//! Request-shape and username validation.

use regex_lite::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Minimum username length, inclusive.
pub const USERNAME_MIN_LEN: usize = 3;
/// Maximum username length, inclusive.
pub const USERNAME_MAX_LEN: usize = 20;

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z0-9_]+$").expect("username pattern is valid"));

/// Checks that every required field is present and non-empty on a request
/// body.
///
/// The body must be a JSON object; arrays and scalars fail the explicit
/// type test. A field passes when it exists, is not JSON null, and its
/// string rendering is non-empty after trimming — strings render as
/// themselves, every other value as its JSON text, so numbers, booleans,
/// and containers never read as empty. All fields are checked; the result
/// is the conjunction.
#[must_use]
pub fn validate_request(body: &Value, required: &[&str]) -> bool {
    let Some(fields) = body.as_object() else {
        return false;
    };
    required.iter().all(|&field| match fields.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(other) => !other.to_string().trim().is_empty(),
    })
}

/// Validates a username: 3–20 characters drawn from `[a-zA-Z0-9_]`.
///
/// Non-string input is invalid rather than coerced, and the whole string
/// must match the pattern, not merely contain a matching substring.
#[must_use]
pub fn is_valid_username(username: &Value) -> bool {
    let Some(name) = username.as_str() else {
        return false;
    };
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&name.len()) && USERNAME_PATTERN.is_match(name)
}
