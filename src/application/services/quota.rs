//! Per-client request quota backed by the expiring key-value store.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use crate::error::AppError;
use crate::infrastructure::store::KeyValueStore;

/// Rolling window after which a quota record expires and the budget resets.
/// The window is measured from record creation and is not refreshed on
/// decrement.
pub const QUOTA_WINDOW: Duration = Duration::from_secs(60 * 60);

/// Quota state reported back to the client after a successful decrement.
#[derive(Debug, Clone, Copy)]
pub struct QuotaReceipt {
    /// Requests left in the current window, post-decrement.
    pub remaining: i64,
    /// Minutes until the window resets (truncated).
    pub reset_minutes: u64,
}

/// Per-client-address request budget, checked before any protected write.
///
/// Quota records live in the same expiring store as the short-link mappings,
/// under their own namespace. The gate is check-then-act: [`check`] admits
/// or rejects, and [`commit`] burns one unit after the protected operation
/// succeeded. Concurrent requests from one client can race between the two
/// calls; the store's per-key atomicity is the only serialization point.
///
/// [`check`]: QuotaGate::check
/// [`commit`]: QuotaGate::commit
pub struct QuotaGate {
    store: Arc<dyn KeyValueStore>,
    initial_quota: u32,
}

impl QuotaGate {
    pub fn new(store: Arc<dyn KeyValueStore>, initial_quota: u32) -> Self {
        Self {
            store,
            initial_quota,
        }
    }

    /// Admits or rejects a request from `client_key`.
    ///
    /// On first contact a fresh record is created with the configured
    /// initial quota and the 1-hour window; the call is admitted without
    /// decrementing — the decrement happens in [`QuotaGate::commit`] once
    /// the protected operation succeeded.
    ///
    /// # Errors
    ///
    /// - [`AppError::TooManyRequests`] when the remaining budget is ≤ 0,
    ///   with the window's remaining minutes in the details
    /// - [`AppError::Internal`] on store round-trip or parse failures,
    ///   distinct from quota exhaustion
    pub async fn check(&self, client_key: &str) -> Result<(), AppError> {
        let Some(raw) = self.store.get(client_key).await? else {
            self.store
                .set(client_key, &self.initial_quota.to_string(), QUOTA_WINDOW)
                .await?;
            return Ok(());
        };

        let remaining: i64 = raw.parse().map_err(|_| {
            AppError::internal(
                "Quota record is not an integer",
                json!({ "client": client_key, "value": raw }),
            )
        })?;

        if remaining <= 0 {
            let reset = self.reset_minutes(client_key).await?;
            return Err(AppError::too_many_requests(
                "Hourly quota exhausted",
                json!({ "rate_limit_reset": reset }),
            ));
        }

        Ok(())
    }

    /// Burns one quota unit after the protected operation succeeded.
    ///
    /// The store's atomic DECR return value is the post-decrement remaining,
    /// so no separate re-read of the record is needed. Errors surface as
    /// [`AppError::Internal`] because the response body depends on the
    /// returned values.
    pub async fn commit(&self, client_key: &str) -> Result<QuotaReceipt, AppError> {
        let remaining = self.store.decr(client_key).await?;
        let reset_minutes = self.reset_minutes(client_key).await?;

        Ok(QuotaReceipt {
            // A record that expired between check and commit is recreated by
            // DECR at -1 without expiry; report the floor instead.
            remaining: remaining.max(0),
            reset_minutes,
        })
    }

    /// Remaining lifetime of the client's quota record, truncated to minutes.
    async fn reset_minutes(&self, client_key: &str) -> Result<u64, AppError> {
        let ttl = self.store.ttl(client_key).await?.unwrap_or_default();
        Ok(ttl.as_secs() / 60)
    }
}
