#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use shorty::application::services::{QuotaGate, ResolverService, ShortenerService};
use shorty::infrastructure::store::{KeyValueStore, StoreResult};
use shorty::state::AppState;

/// Public domain configured for test states.
pub const TEST_DOMAIN: &str = "s.example.com";

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| at <= Instant::now())
    }
}

/// In-memory stand-in for the Redis store, with TTL simulation.
///
/// Mirrors the store contract the services rely on: single-key atomicity
/// (one mutex here), lazily expiring entries, and INCR/DECR creating missing
/// keys at zero without an expiry.
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Inserts an entry directly, bypassing the trait.
    pub fn seed(&self, key: &str, value: &str, ttl: Duration) {
        self.entries.lock().unwrap().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Some(Instant::now() + ttl),
            },
        );
    }

    /// Returns the live (non-expired) value under `key`.
    pub fn value_of(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .filter(|e| !e.is_expired())
            .map(|e| e.value.clone())
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap();
        entries.values().filter(|e| !e.is_expired()).count()
    }

    /// Forces an entry to expire immediately.
    pub fn expire_now(&self, key: &str) {
        if let Some(entry) = self.entries.lock().unwrap().get_mut(key) {
            entry.expires_at = Some(Instant::now() - Duration::from_secs(1));
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut entries = self.entries.lock().unwrap();
        if entries.get(key).is_some_and(Entry::is_expired) {
            entries.remove(key);
        }
        Ok(entries.get(key).map(|e| e.value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        self.seed(key, value, ttl);
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        self.adjust(key, 1)
    }

    async fn decr(&self, key: &str) -> StoreResult<i64> {
        self.adjust(key, -1)
    }

    async fn ttl(&self, key: &str) -> StoreResult<Option<Duration>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .get(key)
            .filter(|e| !e.is_expired())
            .and_then(|e| e.expires_at)
            .map(|at| at.saturating_duration_since(Instant::now())))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

impl MemoryStore {
    fn adjust(&self, key: &str, delta: i64) -> StoreResult<i64> {
        let mut entries = self.entries.lock().unwrap();
        if entries.get(key).is_some_and(Entry::is_expired) {
            entries.remove(key);
        }

        let entry = entries.entry(key.to_string()).or_insert(Entry {
            value: "0".to_string(),
            expires_at: None,
        });

        let current: i64 = entry.value.parse().unwrap_or(0);
        entry.value = (current + delta).to_string();
        Ok(current + delta)
    }
}

/// Builds an `AppState` over in-memory stores.
///
/// Returns the state plus direct handles to the link and quota stores so
/// tests can seed and inspect entries.
pub fn create_test_state(initial_quota: u32) -> (AppState, Arc<MemoryStore>, Arc<MemoryStore>) {
    let links = Arc::new(MemoryStore::new());
    let quotas = Arc::new(MemoryStore::new());

    let links_dyn: Arc<dyn KeyValueStore> = links.clone();
    let quotas_dyn: Arc<dyn KeyValueStore> = quotas.clone();

    let shortener = Arc::new(ShortenerService::new(
        links_dyn.clone(),
        QuotaGate::new(quotas_dyn.clone(), initial_quota),
        TEST_DOMAIN.to_string(),
        24,
    ));
    let resolver = Arc::new(ResolverService::new(links_dyn.clone(), quotas_dyn.clone()));

    let state = AppState::new(shortener, resolver, links_dyn, quotas_dyn, false);

    (state, links, quotas)
}

/// Injects a fixed peer address so handlers extracting `ConnectInfo` work
/// under `TestServer` without a real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
