//! HTTP server initialization and runtime setup.
//!
//! Handles store connections, service assembly, and Axum server lifecycle.

use crate::application::services::{QuotaGate, ResolverService, ShortenerService};
use crate::config::Config;
use crate::infrastructure::store::{KeyValueStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Key prefix of the short-link mapping namespace.
const LINK_NAMESPACE: &str = "link:";
/// Key prefix of the quota-record and visit-counter namespace.
const RATE_NAMESPACE: &str = "rate:";

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis connection (pooled, PING-validated) with the two key namespaces
/// - Shortener, resolver, and quota services
/// - Axum HTTP server with peer-address info for quota accounting
///
/// # Errors
///
/// Returns an error if:
/// - Redis connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let link_store = RedisStore::connect(&config.redis_url, LINK_NAMESPACE).await?;
    let quota_store = link_store.with_prefix(RATE_NAMESPACE);

    let links: Arc<dyn KeyValueStore> = Arc::new(link_store);
    let quotas: Arc<dyn KeyValueStore> = Arc::new(quota_store);

    let shortener = Arc::new(ShortenerService::new(
        links.clone(),
        QuotaGate::new(quotas.clone(), config.api_quota),
        config.public_domain.clone(),
        config.default_expiry_hours,
    ));
    let resolver = Arc::new(ResolverService::new(links.clone(), quotas.clone()));

    let state = AppState::new(shortener, resolver, links, quotas, config.behind_proxy);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
