use async_trait::async_trait;

use crate::errors::ServiceError;

pub mod memory_kv;
pub mod redis_kv;

pub use memory_kv::MemoryKvStore;
pub use redis_kv::RedisKvStore;

const PING_KEY: &str = "__phone_directory_ping__";

/// String-to-string key-value capability the directory is built on.
/// Implementations can be in-process, embedded, or a networked cache.
///
/// The conditional writes have non-atomic defaults (an `exists` check followed
/// by `set`): two concurrent callers may both pass the check. Implementations
/// with a native conditional write should override them.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), ServiceError>;
    async fn exists(&self, key: &str) -> Result<bool, ServiceError>;
    /// Returns the number of entries removed (0 or 1).
    async fn delete(&self, key: &str) -> Result<u64, ServiceError>;

    /// Write only when `key` is absent; `false` means nothing was written.
    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, ServiceError> {
        if self.exists(key).await? {
            return Ok(false);
        }
        self.set(key, value).await?;
        Ok(true)
    }

    /// Write only when `key` is present; `false` means nothing was written.
    async fn set_if_present(&self, key: &str, value: &str) -> Result<bool, ServiceError> {
        if !self.exists(key).await? {
            return Ok(false);
        }
        self.set(key, value).await?;
        Ok(true)
    }

    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<(), ServiceError> {
        self.exists(PING_KEY).await.map(|_| ())
    }

    /// Shutdown hook, called once no more requests will arrive. Connections
    /// held by the store are released when the owner drops it afterwards.
    async fn close(&self) {}
}
