use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::store::KvStore;

/// Process-local key-value store.
/// Conditional writes run under a single write lock, so they are atomic.
#[derive(Clone, Default)]
pub struct MemoryKvStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self { Self::default() }

    pub async fn len(&self) -> usize { self.inner.read().await.len() }

    pub async fn is_empty(&self) -> bool { self.inner.read().await.is_empty() }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.contains_key(key))
    }

    async fn delete(&self, key: &str) -> Result<u64, ServiceError> {
        let mut map = self.inner.write().await;
        Ok(map.remove(key).map_or(0, |_| 1))
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, ServiceError> {
        let mut map = self.inner.write().await;
        if map.contains_key(key) {
            return Ok(false);
        }
        map.insert(key.to_string(), value.to_string());
        Ok(true)
    }

    async fn set_if_present(&self, key: &str, value: &str) -> Result<bool, ServiceError> {
        let mut map = self.inner.write().await;
        match map.get_mut(key) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), ServiceError> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_kv_store_basic_crud() -> Result<(), anyhow::Error> {
        let store = MemoryKvStore::new();
        assert!(store.is_empty().await);

        store.set("+1234567890", "123 Main St").await?;
        assert!(store.exists("+1234567890").await?);
        assert_eq!(store.get("+1234567890").await?.as_deref(), Some("123 Main St"));

        // keys are used verbatim
        assert!(!store.exists("1234567890").await?);

        assert_eq!(store.delete("+1234567890").await?, 1);
        assert_eq!(store.delete("+1234567890").await?, 0);
        assert_eq!(store.get("+1234567890").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn clones_share_state() -> Result<(), anyhow::Error> {
        let a = MemoryKvStore::new();
        let b = a.clone();
        a.set("k", "v").await?;
        assert_eq!(b.get("k").await?.as_deref(), Some("v"));
        assert_eq!(b.len().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_set_if_absent_has_one_winner() -> Result<(), anyhow::Error> {
        let store = MemoryKvStore::new();
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.set_if_absent("+15550000", &format!("addr {i}")).await
            }));
        }
        let mut winners = 0;
        for h in handles {
            if h.await?? {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
        assert_eq!(store.len().await, 1);
        Ok(())
    }
}
