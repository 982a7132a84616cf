//! Shortening workflow: quota, validation, identifier allocation, persist.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use super::quota::QuotaGate;
use crate::error::AppError;
use crate::infrastructure::store::KeyValueStore;
use crate::utils::alias::{generate_id, validate_alias};
use crate::utils::url_guard::canonicalize_url;

/// Successful shorten result, echoed back to the client.
#[derive(Debug)]
pub struct ShortenOutcome {
    /// The canonical (https-forced) long URL that was stored.
    pub url: String,
    /// Full short link: configured public domain + "/" + identifier.
    pub short_url: String,
    /// Expiry applied to the mapping, in hours.
    pub expiry_hours: u64,
    /// Remaining quota after this request's decrement.
    pub rate_limit: i64,
    /// Minutes until the quota window resets.
    pub rate_limit_reset: u64,
}

/// Creates short-link mappings, gated by the per-client quota.
///
/// Every step is a hard precondition: the first failure short-circuits the
/// request, and nothing is written before the collision check passes.
pub struct ShortenerService {
    links: Arc<dyn KeyValueStore>,
    quota: QuotaGate,
    public_domain: String,
    default_expiry_hours: u64,
}

impl ShortenerService {
    pub fn new(
        links: Arc<dyn KeyValueStore>,
        quota: QuotaGate,
        public_domain: String,
        default_expiry_hours: u64,
    ) -> Self {
        Self {
            links,
            quota,
            public_domain,
            default_expiry_hours,
        }
    }

    /// Shortens `raw_url` for the client identified by `client_key`.
    ///
    /// # Arguments
    ///
    /// - `raw_url` - the long URL to shorten
    /// - `custom_alias` - identifier to use verbatim instead of a generated
    ///   one; `None` or empty selects a random 6-character identifier
    /// - `expiry_hours` - mapping lifetime; `None` or zero falls back to the
    ///   configured default (24 hours)
    /// - `client_key` - client network address, the quota key
    ///
    /// # Errors
    ///
    /// - [`AppError::TooManyRequests`] when the client's quota is exhausted
    /// - [`AppError::Validation`] for malformed URLs, loopback targets,
    ///   rejected aliases, or an expiry too large to express as seconds
    /// - [`AppError::Conflict`] when the chosen identifier already maps to a
    ///   URL; auto-generated identifiers are not regenerated on collision
    /// - [`AppError::Internal`] on store failures
    pub async fn shorten(
        &self,
        raw_url: &str,
        custom_alias: Option<&str>,
        expiry_hours: Option<u64>,
        client_key: &str,
    ) -> Result<ShortenOutcome, AppError> {
        self.quota.check(client_key).await?;

        let url = canonicalize_url(raw_url)?;

        let id = match custom_alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                validate_alias(alias)?;
                alias.to_string()
            }
            None => generate_id(),
        };

        if self.links.get(&id).await?.is_some() {
            return Err(AppError::conflict(
                "Short link already in use",
                json!({ "short": id }),
            ));
        }

        let expiry_hours = expiry_hours
            .filter(|&h| h > 0)
            .unwrap_or(self.default_expiry_hours);
        let ttl_secs = expiry_hours.checked_mul(3600).ok_or_else(|| {
            AppError::bad_request(
                "Expiry is too large",
                json!({ "expiry": expiry_hours }),
            )
        })?;

        self.links
            .set(&id, &url, Duration::from_secs(ttl_secs))
            .await?;

        let receipt = self.quota.commit(client_key).await?;

        Ok(ShortenOutcome {
            short_url: format!("{}/{}", self.public_domain.trim_end_matches('/'), id),
            url,
            expiry_hours,
            rate_limit: receipt.remaining,
            rate_limit_reset: receipt.reset_minutes,
        })
    }
}
