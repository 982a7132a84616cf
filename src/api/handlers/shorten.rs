//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::HeaderMap,
};
use std::net::SocketAddr;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "http://example.com/a",
///   "short": "my-link",   // optional custom alias
///   "expiry": 48          // optional, hours
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "url": "https://example.com/a",
///   "short": "s.example.com/my-link",
///   "expiry": 48,
///   "rate_limit": 9,
///   "rate_limit_reset": 59
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: malformed body, invalid URL, loopback target,
///   rejected alias
/// - 409 Conflict: the chosen identifier is already in use
/// - 429 Too Many Requests: hourly quota exhausted; details carry
///   `rate_limit_reset` minutes
/// - 500 Internal Server Error: store failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let client_key = client_ip(&headers, addr, state.behind_proxy);

    let outcome = state
        .shortener
        .shorten(
            &payload.url,
            payload.short.as_deref(),
            payload.expiry,
            &client_key,
        )
        .await?;

    Ok(Json(ShortenResponse {
        url: outcome.url,
        short: outcome.short_url,
        expiry: outcome.expiry_hours,
        rate_limit: outcome.rate_limit,
        rate_limit_reset: outcome.rate_limit_reset,
    }))
}
