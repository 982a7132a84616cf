//! Key-value store abstraction and implementations.

pub mod redis_store;
pub mod service;

pub use redis_store::RedisStore;
pub use service::{KeyValueStore, StoreError, StoreResult};
