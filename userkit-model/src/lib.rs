//! User-record shaping, validation, and statistics for the API layer.
//!
//! Every operation here works on plain `serde_json::Value` records and is
//! pure, synchronous, and reentrant:
//! - [`format_user_data`] / [`project`] — whitelist projection for responses
//! - [`validate_request`] / [`is_valid_username`] — request-shape validation
//! - [`sanitize_input`] — minimal input sanitization
//! - [`merge_user_defaults`] — whitelisted overlay onto immutable defaults
//! - [`user_stats`] — aggregate statistics over a record collection
//! - [`process_external_data`] — normalization of externally sourced records
//! - [`random_user`] — synthetic records for tests and demos
//! - [`deep_clone`] — structural copy via the JSON text form
//!
//! Malformed input fails soft (`false` / `None` / empty values); only
//! [`deep_clone`] returns a hard error. The wall clock and the random
//! source are injectable through the `*_within` / `*_at` / `*_with`
//! variants so callers and tests control them.

mod clone;
mod generator;
mod merge;
mod normalize;
mod record;
mod sanitize;
mod stats;
mod validate;

pub use clone::deep_clone;
pub use generator::{
    random_user, random_user_with, CREATED_AT_MAX_AGE_DAYS, EMAIL_DOMAINS, FIRST_NAMES,
    JOIN_DATE_MAX_AGE_DAYS, LAST_NAMES,
};
pub use merge::{merge_user_defaults, METADATA_FIELDS, PREFERENCE_FIELDS, TOP_LEVEL_FIELDS};
pub use normalize::{process_external_data, process_external_data_at, EXTERNAL_FIELDS};
pub use record::{format_user_data, project, RESPONSE_FIELDS};
pub use sanitize::sanitize_input;
pub use stats::{user_stats, user_stats_within, UserStats, ACTIVE_WINDOW_DAYS};
pub use validate::{is_valid_username, validate_request, USERNAME_MAX_LEN, USERNAME_MIN_LEN};
