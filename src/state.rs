use std::sync::Arc;

use crate::application::services::{ResolverService, ShortenerService};
use crate::infrastructure::store::KeyValueStore;

/// Shared application state injected into all handlers.
///
/// Store handles are kept alongside the services for the health endpoint's
/// per-namespace checks.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub resolver: Arc<ResolverService>,
    pub links: Arc<dyn KeyValueStore>,
    pub quotas: Arc<dyn KeyValueStore>,
    /// When true, the quota key is read from X-Forwarded-For / X-Real-IP
    /// headers instead of the peer socket address. Enable only behind a
    /// trusted reverse proxy.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        shortener: Arc<ShortenerService>,
        resolver: Arc<ResolverService>,
        links: Arc<dyn KeyValueStore>,
        quotas: Arc<dyn KeyValueStore>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            shortener,
            resolver,
            links,
            quotas,
            behind_proxy,
        }
    }
}
