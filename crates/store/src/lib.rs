//! # Slotbook Store
//!
//! Persistence layer for Slotbook: a string-keyed key-value store
//! abstraction with a durable file-backed implementation, the
//! repositories that mediate every read and write of application state,
//! and whole-store backup export/import.
//!
//! Repositories are the exclusive writers of their keys; no other
//! component touches the store directly.

pub mod backup;
pub mod envelope;
pub mod keys;
pub mod kv;
pub mod mock;
pub mod repositories;

pub use kv::{FileStore, KeyValueStore};

use std::path::Path;

use eyre::Result;

/// Opens the durable store under `data_dir`, creating the directory if
/// needed.
pub async fn open_store(data_dir: &Path) -> Result<FileStore> {
    FileStore::open(data_dir).await
}
