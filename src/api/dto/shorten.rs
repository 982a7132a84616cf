//! DTOs for link shortening endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom alias validation.
static CUSTOM_ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The long URL to shorten; canonicalized and https-forced by the service.
    pub url: String,

    /// Optional custom short identifier used verbatim instead of a generated one.
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*CUSTOM_ALIAS_REGEX"))]
    pub short: Option<String>,

    /// Optional mapping lifetime in hours, capped at one year. Zero or
    /// absent falls back to the configured default (24 hours).
    #[validate(range(max = 8760))]
    pub expiry: Option<u64>,
}

/// Successful shorten response.
///
/// `rate_limit` is the remaining quota after this request's decrement and
/// `rate_limit_reset` the minutes until the hourly window resets.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub url: String,
    pub short: String,
    pub expiry: u64,
    pub rate_limit: i64,
    pub rate_limit_reset: u64,
}
