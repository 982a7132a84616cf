//! Redis-backed key-value store implementation.

use super::service::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::info;

/// Redis store for short-link mappings and quota records.
///
/// Uses a process-wide `ConnectionManager` for pooled connection reuse
/// instead of a cold connection per request. Errors propagate to callers;
/// the store is the source of truth, not a fail-open cache.
pub struct RedisStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis, validates the connection with a PING, and scopes
    /// all keys under `key_prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, key_prefix: &str) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis (namespace '{}')", key_prefix);

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.to_string(),
        })
    }

    /// Creates a second store over the same pooled connection, scoped to a
    /// different key namespace.
    pub fn with_prefix(&self, key_prefix: &str) -> Self {
        Self {
            client: self.client.clone(),
            key_prefix: key_prefix.to_string(),
        }
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(&key)
            .await
            .map_err(|e| StoreError::Operation(format!("GET {}: {}", key, e)))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        let key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(&key, value, ttl.as_secs())
            .await
            .map_err(|e| StoreError::Operation(format!("SETEX {}: {}", key, e)))
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.incr::<_, _, i64>(&key, 1)
            .await
            .map_err(|e| StoreError::Operation(format!("INCR {}: {}", key, e)))
    }

    async fn decr(&self, key: &str) -> StoreResult<i64> {
        let key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.decr::<_, _, i64>(&key, 1)
            .await
            .map_err(|e| StoreError::Operation(format!("DECR {}: {}", key, e)))
    }

    async fn ttl(&self, key: &str) -> StoreResult<Option<Duration>> {
        let key = self.build_key(key);
        let mut conn = self.client.clone();

        let secs = conn
            .ttl::<_, i64>(&key)
            .await
            .map_err(|e| StoreError::Operation(format!("TTL {}: {}", key, e)))?;

        // Redis returns -2 for a missing key and -1 for a key without expiry.
        if secs < 0 {
            Ok(None)
        } else {
            Ok(Some(Duration::from_secs(secs as u64)))
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
