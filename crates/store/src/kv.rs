//! Key-value store abstraction and the durable file-backed implementation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use eyre::{Result, WrapErr};
use tokio::sync::Mutex;

/// String-keyed durable storage.
///
/// Values are opaque strings (JSON documents or scalars). Implementations
/// must make each `set`/`remove`/`clear` durable before returning; a call
/// that returns `Ok` has fully landed, one that errors has left the
/// previous state visible.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
    async fn clear(&self) -> Result<()>;
    async fn keys(&self) -> Result<Vec<String>>;
}

/// Durable store persisting the whole key space as one JSON object in
/// `store.json` under the data directory.
///
/// Writes go to a temp file in the same directory followed by a rename,
/// so a crash mid-write leaves the previous file intact. An internal
/// mutex serializes writers within the process.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

const STORE_FILE: &str = "store.json";

impl FileStore {
    /// Opens (or creates) the store under `data_dir`.
    pub async fn open(data_dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .wrap_err_with(|| format!("Failed to create data directory {}", data_dir.display()))?;

        Ok(Self {
            path: data_dir.join(STORE_FILE),
            write_lock: Mutex::new(()),
        })
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw)
                .wrap_err_with(|| format!("Store file {} is not valid JSON", self.path.display())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err).wrap_err_with(|| {
                format!("Failed to read store file {}", self.path.display())
            }),
        }
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string(map)?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, raw)
            .await
            .wrap_err_with(|| format!("Failed to write store file {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .wrap_err_with(|| format!("Failed to replace store file {}", self.path.display()))?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.read_map().await?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        map.remove(key);
        self.write_map(&map).await
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.write_map(&BTreeMap::new()).await
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let map = self.read_map().await?;
        Ok(map.into_keys().collect())
    }
}
