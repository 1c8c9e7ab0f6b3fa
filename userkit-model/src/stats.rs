//! Aggregate statistics over user-record collections.
//!
//! Classification policy for malformed records:
//! - a record whose effective activity instant (`updatedAt`, else
//!   `createdAt`) is missing or unparseable counts as inactive;
//! - a record whose `createdAt` is missing or unparseable never wins the
//!   `newest`/`oldest` comparison;
//! - a record without a usable email counts under the `"unknown"` domain.
//!
//! Malformed instants are reported through `tracing::warn!`, never a
//! panic — this code sits on a request path.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;
use userkit_types::timestamp::parse_instant;

/// Days within which a record's last activity counts as active.
pub const ACTIVE_WINDOW_DAYS: i64 = 30;

/// Domain bucket for records without a usable email.
const UNKNOWN_DOMAIN: &str = "unknown";

/// Computed, non-persisted summary of a record collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Number of records in the input.
    pub total: u64,
    /// Records whose last activity falls within the active window.
    pub active: u64,
    /// The complement; `active + inactive == total` for all inputs.
    pub inactive: u64,
    /// Full record with the greatest `createdAt`; first occurrence wins ties.
    pub newest: Option<Value>,
    /// Full record with the smallest `createdAt`; first occurrence wins ties.
    pub oldest: Option<Value>,
    /// Count of records per email domain.
    pub by_domain: BTreeMap<String, u64>,
}

/// Summarizes a collection of user records against the current instant.
///
/// Returns `None` unless `users` is a JSON array. Equivalent to
/// [`user_stats_within`] with `Utc::now()` and [`ACTIVE_WINDOW_DAYS`].
#[must_use]
pub fn user_stats(users: &Value) -> Option<UserStats> {
    user_stats_within(users, Utc::now(), Duration::days(ACTIVE_WINDOW_DAYS))
}

/// Summarizes a collection against an explicit instant and window.
///
/// The explicit-clock variant exists so tests control the classification
/// boundary. The window is inclusive: a record last active exactly
/// `window` ago is still active. Scanning is stable — strict comparisons
/// in input order — so the first of several tied records wins
/// `newest`/`oldest`.
#[must_use]
pub fn user_stats_within(users: &Value, now: DateTime<Utc>, window: Duration) -> Option<UserStats> {
    let records = users.as_array()?;

    let mut active = 0u64;
    let mut by_domain: BTreeMap<String, u64> = BTreeMap::new();
    let mut newest: Option<(usize, DateTime<Utc>)> = None;
    let mut oldest: Option<(usize, DateTime<Utc>)> = None;

    for (index, record) in records.iter().enumerate() {
        if last_activity(record).is_some_and(|at| now - at <= window) {
            active += 1;
        }

        if let Some(created) = created_at(record) {
            if newest.is_none_or(|(_, best)| created > best) {
                newest = Some((index, created));
            }
            if oldest.is_none_or(|(_, best)| created < best) {
                oldest = Some((index, created));
            }
        }

        *by_domain.entry(email_domain(record).to_string()).or_insert(0) += 1;
    }

    let total = records.len() as u64;
    Some(UserStats {
        total,
        active,
        inactive: total - active,
        newest: newest.map(|(index, _)| records[index].clone()),
        oldest: oldest.map(|(index, _)| records[index].clone()),
        by_domain,
    })
}

/// Effective activity instant: `updatedAt` when present, else `createdAt`.
fn last_activity(record: &Value) -> Option<DateTime<Utc>> {
    let raw = record
        .get("updatedAt")
        .and_then(Value::as_str)
        .or_else(|| record.get("createdAt").and_then(Value::as_str))?;
    parse_or_warn(raw, "activity")
}

fn created_at(record: &Value) -> Option<DateTime<Utc>> {
    let raw = record.get("createdAt").and_then(Value::as_str)?;
    parse_or_warn(raw, "createdAt")
}

fn parse_or_warn(raw: &str, field: &str) -> Option<DateTime<Utc>> {
    let parsed = parse_instant(raw);
    if parsed.is_none() {
        warn!("malformed {field} instant: {raw:?}");
    }
    parsed
}

/// Domain bucket for a record: the substring after the first `@` of its
/// `email`, or `"unknown"` when the email is absent, empty, not a string,
/// or has no `@`.
fn email_domain(record: &Value) -> &str {
    record
        .get("email")
        .and_then(Value::as_str)
        .filter(|email| !email.is_empty())
        .and_then(|email| email.split('@').nth(1))
        .unwrap_or(UNKNOWN_DOMAIN)
}
