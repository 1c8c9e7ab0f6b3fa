//! Synthetic user records for tests and demos.
//!
//! The generated shape is the canonical user record: `id`, `username`,
//! `email`, `createdAt`, and a nested `profile`. The `createdAt` offset
//! and the profile `joinDate` offset are independent draws — nothing
//! requires the two dates to agree.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde_json::{json, Value};
use userkit_types::timestamp::{format_calendar_date, format_instant};
use uuid::Uuid;

/// First names the generator draws from.
pub const FIRST_NAMES: [&str; 10] = [
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth",
];

/// Last names the generator draws from.
pub const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];

/// Email domains the generator draws from.
pub const EMAIL_DOMAINS: [&str; 4] = ["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

/// Oldest possible `createdAt`, in days before the generation instant.
pub const CREATED_AT_MAX_AGE_DAYS: i64 = 100;
/// Oldest possible profile `joinDate`, in days before the generation instant.
pub const JOIN_DATE_MAX_AGE_DAYS: i64 = 365;

/// Generates a random user record from the thread RNG and the wall clock.
#[must_use]
pub fn random_user() -> Value {
    random_user_with(&mut rand::thread_rng(), Utc::now())
}

/// Generates a random user record from an explicit RNG and instant.
///
/// The explicit-source variant exists so tests get deterministic fixtures.
#[must_use]
pub fn random_user_with<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Value {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];

    let username = format!("{first}{last}{}", rng.gen_range(100..=999)).to_lowercase();
    let email = format!("{username}@{domain}");

    let created_at = now - Duration::days(rng.gen_range(1..=CREATED_AT_MAX_AGE_DAYS));
    let join_date = now - Duration::days(rng.gen_range(1..=JOIN_DATE_MAX_AGE_DAYS));

    json!({
        "id": Uuid::new_v4().to_string(),
        "username": username,
        "email": email,
        "createdAt": format_instant(created_at),
        "profile": {
            "firstName": first,
            "lastName": last,
            "fullName": format!("{first} {last}"),
            "joinDate": format_calendar_date(join_date)
        }
    })
}
