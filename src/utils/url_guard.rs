//! Long-URL validation and canonicalization.
//!
//! Every accepted URL is parsed, checked against loopback targets, and
//! rewritten to the secure scheme before it is persisted.

use url::{Host, Url};

/// Errors that can occur while screening a long URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlGuardError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URLs targeting the local host cannot be shortened")]
    ForbiddenHost,

    #[error("Failed to canonicalize URL: {0}")]
    CanonicalizationFailed(String),
}

/// Validates a long URL and returns its canonical, https-forced form.
///
/// # Rules
///
/// 1. Must parse as an absolute URL
/// 2. Scheme must be HTTP or HTTPS (rejects `javascript:`, `data:`, ...)
/// 3. Host must not be the loopback address or `localhost`
/// 4. Scheme is rewritten to `https` unconditionally
///
/// Hostname case and default ports are normalized by the parser itself.
///
/// # Errors
///
/// Returns [`UrlGuardError::InvalidFormat`] for malformed or relative URLs,
/// [`UrlGuardError::UnsupportedProtocol`] for non-HTTP(S) schemes, and
/// [`UrlGuardError::ForbiddenHost`] for local-only targets.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     canonicalize_url("http://example.com/a").unwrap(),
///     "https://example.com/a"
/// );
/// assert!(canonicalize_url("http://localhost:3000/x").is_err());
/// ```
pub fn canonicalize_url(input: &str) -> Result<String, UrlGuardError> {
    let mut url =
        Url::parse(input).map_err(|e| UrlGuardError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlGuardError::UnsupportedProtocol),
    }

    match url.host() {
        Some(Host::Domain(domain)) => {
            if domain.eq_ignore_ascii_case("localhost") {
                return Err(UrlGuardError::ForbiddenHost);
            }
        }
        Some(Host::Ipv4(ip)) => {
            if ip.is_loopback() {
                return Err(UrlGuardError::ForbiddenHost);
            }
        }
        Some(Host::Ipv6(ip)) => {
            if ip.is_loopback() {
                return Err(UrlGuardError::ForbiddenHost);
            }
        }
        None => return Err(UrlGuardError::InvalidFormat("URL has no host".to_string())),
    }

    url.set_scheme("https").map_err(|_| {
        UrlGuardError::CanonicalizationFailed("Failed to enforce https scheme".to_string())
    })?;

    Ok(url.to_string())
}
