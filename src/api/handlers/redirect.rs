//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Request Flow
///
/// 1. Look up the mapping in the link store
/// 2. Increment the global visit counter (best-effort, never blocks)
/// 3. Return 301 Moved Permanently with the stored URL
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown or expired, and
/// 500 Internal Server Error if the store read fails.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.resolver.resolve(&id).await?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, target)]))
}
