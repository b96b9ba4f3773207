//! Test doubles for the key-value store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use eyre::Result;
use mockall::mock;
use tokio::sync::RwLock;

use crate::kv::KeyValueStore;

/// Ephemeral in-memory store. Used by tests and by callers that want a
/// scratch store without touching disk.
#[derive(Default)]
pub struct MemoryStore {
    map: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.map
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.map.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.map.write().await.clear();
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        Ok(self.map.read().await.keys().cloned().collect())
    }
}

// Mock store for failure-injection tests
mock! {
    pub Store {}

    #[async_trait]
    impl KeyValueStore for Store {
        async fn get(&self, key: &str) -> Result<Option<String>>;
        async fn set(&self, key: &str, value: &str) -> Result<()>;
        async fn remove(&self, key: &str) -> Result<()>;
        async fn clear(&self) -> Result<()>;
        async fn keys(&self) -> Result<Vec<String>>;
    }
}
