//! Key-value store trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Errors that can occur during store operations.
///
/// Store failures are infrastructure errors: unlike a cache, the store owns
/// all persisted state, so callers surface these instead of degrading.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store operation failed: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for the expiring key-value store backing mappings and quotas.
///
/// The store must guarantee atomicity of each single-key primitive; it is
/// the only serialization point in the system. Implementations must be
/// thread-safe. Two logical namespaces (short-link mappings, quota records
/// plus the visit counter) are realized as separate trait objects, typically
/// with distinct key prefixes over one physical store.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed store with
///   pooled connections
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieves the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or already expired; that is
    /// a normal outcome, not an error.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key` with the given time-to-live.
    ///
    /// Overwrites any existing value and resets the expiry.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()>;

    /// Atomically increments the integer stored under `key` by one and
    /// returns the new value. A missing key is created at zero first and
    /// carries no expiry.
    async fn incr(&self, key: &str) -> StoreResult<i64>;

    /// Atomically decrements the integer stored under `key` by one and
    /// returns the new value. The key's remaining TTL is not refreshed.
    async fn decr(&self, key: &str) -> StoreResult<i64>;

    /// Returns the remaining time-to-live of `key`, or `None` when the key
    /// does not exist or has no expiry.
    async fn ttl(&self, key: &str) -> StoreResult<Option<Duration>>;

    /// Checks if the store backend is reachable.
    ///
    /// Used by the health endpoint to report store status.
    async fn health_check(&self) -> bool;
}
