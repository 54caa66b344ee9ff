//! Field decoders that drop malformed style data instead of failing.
//!
//! A value that does not match its type decodes to `None` (or is left out
//! of its list) and is logged at debug level, so one bad attribute never
//! rejects the document around it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Decode an optional value, mapping a malformed one to `None`.
pub(crate) fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(err) => {
            debug!(error = %err, "Dropped malformed style value");
            Ok(None)
        }
    }
}

/// Decode a list, keeping only the elements that decode.
pub(crate) fn vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            debug!(value = %other, "Dropped style list that is not an array");
            return Ok(Vec::new());
        }
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                debug!(error = %err, "Dropped malformed style list entry");
                None
            }
        })
        .collect())
}
