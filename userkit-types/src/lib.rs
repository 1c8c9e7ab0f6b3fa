//! Shared primitives for the userkit workspace.
//!
//! Defines the foundational pieces the record model builds on:
//! - [`Error`] and [`Result`] — the single hard-failure surface
//! - [`timestamp`] — ISO-8601 instant parsing and rendering
//!
//! Record values themselves are plain `serde_json::Value` trees; no
//! domain-specific types live here.

pub mod timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in record operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
