//! Resolution workflow: mapping lookup plus the global visit counter.

use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::error::AppError;
use crate::infrastructure::store::KeyValueStore;

/// Fixed key of the global visit counter in the counter namespace.
pub const VISIT_COUNTER_KEY: &str = "counter";

/// Resolves short identifiers back to their stored long URLs.
pub struct ResolverService {
    links: Arc<dyn KeyValueStore>,
    counters: Arc<dyn KeyValueStore>,
}

impl ResolverService {
    pub fn new(links: Arc<dyn KeyValueStore>, counters: Arc<dyn KeyValueStore>) -> Self {
        Self { links, counters }
    }

    /// Looks up `id` and returns the redirect target.
    ///
    /// Each successful resolution increments the global visit counter by
    /// one. The increment is best-effort: a counter failure is logged at
    /// WARN and never blocks the redirect.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] when the identifier is unknown or its
    ///   mapping has expired
    /// - [`AppError::Internal`] when the mapping read itself fails
    pub async fn resolve(&self, id: &str) -> Result<String, AppError> {
        let long_url = self
            .links
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown short link", json!({ "short": id })))?;

        if let Err(e) = self.counters.incr(VISIT_COUNTER_KEY).await {
            warn!(error = %e, "failed to increment visit counter");
        }

        Ok(long_url)
    }
}
