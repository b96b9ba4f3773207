//! Versioned envelope for persisted collections.
//!
//! Collections are stored as `{"schema": N, "items": [...]}` so a restore
//! from an incompatible future version is rejected instead of applied
//! blindly. Bare arrays written by earlier releases are still accepted.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use slotbook_core::errors::{SchedulingError, SchedulingResult};

/// Current on-disk schema for persisted collections.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a, T> {
    schema: u32,
    items: &'a [T],
}

/// Serializes `items` under the current schema version.
pub fn encode_list<T: Serialize>(items: &[T]) -> SchedulingResult<String> {
    let envelope = Envelope {
        schema: SCHEMA_VERSION,
        items,
    };
    serde_json::to_string(&envelope).map_err(|e| SchedulingError::Store(e.into()))
}

/// Decodes the raw value stored under `key` into a list.
///
/// - absent key: empty list
/// - unreadable JSON or unreadable items: logged and treated as empty,
///   matching the tolerance the app has always had for a corrupt store
/// - a well-formed envelope with an unknown schema number: error, since
///   that is a document from a future version rather than corruption
pub fn decode_list<T: DeserializeOwned>(
    key: &str,
    raw: Option<String>,
) -> SchedulingResult<Vec<T>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("Stored value under '{}' is not valid JSON, treating as empty: {}", key, err);
            return Ok(Vec::new());
        }
    };

    let items = if value.is_array() {
        // Legacy layout: a bare array, read as the current schema.
        value
    } else if let Value::Object(map) = &value {
        let schema = map.get("schema").and_then(Value::as_u64).unwrap_or(0) as u32;
        if schema != SCHEMA_VERSION {
            return Err(SchedulingError::UnsupportedSchema {
                key: key.to_string(),
                found: schema,
            });
        }
        map.get("items").cloned().unwrap_or(Value::Array(Vec::new()))
    } else {
        tracing::warn!("Stored value under '{}' has an unexpected shape, treating as empty", key);
        return Ok(Vec::new());
    };

    match serde_json::from_value(items) {
        Ok(items) => Ok(items),
        Err(err) => {
            tracing::warn!("Stored items under '{}' are unreadable, treating as empty: {}", key, err);
            Ok(Vec::new())
        }
    }
}
