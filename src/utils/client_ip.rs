//! Client address extraction for quota accounting.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Resolves the client network address used as the quota key.
///
/// By default the peer socket address is used. When the service runs behind
/// a trusted reverse proxy (`BEHIND_PROXY=true`), the original client is
/// taken from `X-Forwarded-For` (first entry) or `X-Real-IP` instead, since
/// the peer address would otherwise always be the proxy itself.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        if let Some(forwarded) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return forwarded.to_string();
        }

        if let Some(real_ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return real_ip.to_string();
        }
    }

    peer.ip().to_string()
}
