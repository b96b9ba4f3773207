//! Whole-store backup export and import.
//!
//! A backup is one JSON document carrying every key-value pair in the
//! store: `{"schema": 1, "entries": [[key, value], ...]}`. Export writes
//! the document to a file for the platform's share handoff; import
//! validates the whole document before applying anything, so a malformed
//! backup never partially overwrites a store.

use std::path::Path;

use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use slotbook_core::errors::{SchedulingError, SchedulingResult};

use crate::kv::KeyValueStore;

/// Current backup document schema.
pub const BACKUP_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct BackupDocument {
    schema: u32,
    entries: Vec<(String, String)>,
}

/// Serializes every key-value pair in the store into a backup document.
pub async fn export<S: KeyValueStore>(store: &S) -> SchedulingResult<String> {
    let mut entries = Vec::new();
    for key in store.keys().await? {
        if let Some(value) = store.get(&key).await? {
            entries.push((key, value));
        }
    }

    tracing::debug!("Exporting backup: entries={}", entries.len());
    let document = BackupDocument {
        schema: BACKUP_SCHEMA_VERSION,
        entries,
    };
    serde_json::to_string(&document).map_err(|e| SchedulingError::Store(e.into()))
}

/// Exports the backup document to `path`, ready to hand to the platform
/// share mechanism.
pub async fn export_to_file<S: KeyValueStore>(store: &S, path: &Path) -> SchedulingResult<()> {
    let document = export(store).await?;
    tokio::fs::write(path, document)
        .await
        .wrap_err_with(|| format!("Failed to write backup file {}", path.display()))?;
    Ok(())
}

/// Restores a backup document into the store, overwriting existing keys,
/// and returns the number of restored pairs.
///
/// The document is parsed and shape-checked in full before the first
/// write. A bare `[[key, value], ...]` array (the unversioned format of
/// early releases) is accepted; anything else malformed aborts with no
/// change to the store.
pub async fn import<S: KeyValueStore>(store: &S, json: &str) -> SchedulingResult<usize> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| SchedulingError::RestoreFormat(format!("not valid JSON: {e}")))?;

    let entries: Vec<(String, String)> = if value.is_array() {
        // Legacy unversioned export: a bare pair list.
        serde_json::from_value(value)
            .map_err(|e| SchedulingError::RestoreFormat(format!("not a pair list: {e}")))?
    } else if let Some(map) = value.as_object() {
        let schema = map.get("schema").and_then(Value::as_u64).unwrap_or(0) as u32;
        if schema != BACKUP_SCHEMA_VERSION {
            return Err(SchedulingError::UnsupportedSchema {
                key: "backup".to_string(),
                found: schema,
            });
        }
        let document: BackupDocument = serde_json::from_value(value)
            .map_err(|e| SchedulingError::RestoreFormat(format!("not a pair list: {e}")))?;
        document.entries
    } else {
        return Err(SchedulingError::RestoreFormat(
            "expected a backup object or pair list".to_string(),
        ));
    };

    tracing::debug!("Restoring backup: entries={}", entries.len());
    for (key, value) in &entries {
        store.set(key, value).await?;
    }

    Ok(entries.len())
}
