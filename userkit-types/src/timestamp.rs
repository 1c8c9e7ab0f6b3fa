//! ISO-8601 instant parsing and rendering.
//!
//! Records carry instants as RFC 3339 strings (`2024-03-01T12:00:00.000Z`).
//! Parsing is deliberately soft: a malformed instant yields `None`, the
//! sentinel the statistics classifier builds on — it never wins a
//! comparison and never classifies a record as active. Rendering always
//! uses UTC with millisecond precision.

use chrono::{DateTime, SecondsFormat, Utc};

/// Parses an RFC 3339 instant, normalizing to UTC.
///
/// Returns `None` for anything that does not parse.
#[must_use]
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Renders an instant as RFC 3339 with millisecond precision and a `Z`
/// suffix, the wire form used by every record timestamp field.
#[must_use]
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders the calendar-date portion of an instant (`YYYY-MM-DD`).
#[must_use]
pub fn format_calendar_date(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}
