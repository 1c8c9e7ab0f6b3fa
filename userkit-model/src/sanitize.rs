//! Minimal input sanitization.

use serde_json::Value;

/// Trims a string value and strips every literal `<` and `>`.
///
/// Non-string input yields an empty string — no coercion. This removes
/// angle brackets globally rather than escaping them; it is NOT an HTML
/// or script sanitizer, and callers needing real markup hygiene must
/// handle that upstream.
#[must_use]
pub fn sanitize_input(input: &Value) -> String {
    match input.as_str() {
        Some(s) => s.trim().chars().filter(|&c| c != '<' && c != '>').collect(),
        None => String::new(),
    }
}
