//! Deep clone via the JSON text form.

use serde::de::DeserializeOwned;
use serde::Serialize;
use userkit_types::Result;

/// Produces a structurally independent copy of `value` by round-tripping
/// it through JSON text.
///
/// The clone shares no container with the input. Anything the interchange
/// form cannot represent fails loudly at the serialization boundary
/// ([`userkit_types::Error::Serialization`]), with one carve-out: serde
/// renders non-finite floats as JSON `null`, so those are dropped to null
/// rather than rejected, and re-parsing into a typed numeric field then
/// fails loudly. Owned Rust values cannot be cyclic, so the reference
/// cycles the text form cannot express do not arise here.
///
/// # Errors
///
/// Returns [`userkit_types::Error::Serialization`] when the value cannot
/// be rendered as JSON (e.g. a map keyed by a non-string type) or when
/// the rendered text no longer parses back into `T`.
pub fn deep_clone<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let text = serde_json::to_string(value)?;
    Ok(serde_json::from_str(&text)?)
}
