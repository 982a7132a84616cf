//! Short identifier generation and custom alias screening.

use crate::error::AppError;
use serde_json::json;
use uuid::Uuid;

/// Length of auto-generated short identifiers.
pub const ID_LENGTH: usize = 6;

/// Aliases that cannot be used as short links.
///
/// These are reserved for system endpoints to prevent routing conflicts.
const RESERVED_ALIASES: &[&str] = &["api", "health"];

/// Generates a random short identifier.
///
/// Takes the first [`ID_LENGTH`] characters of a freshly generated v4 UUID,
/// so identifiers are globally random rather than content-derived. Collision
/// probability is accepted at this length; a colliding identifier fails the
/// request instead of being regenerated.
///
/// # Examples
///
/// ```ignore
/// let id = generate_id();
/// assert_eq!(id.len(), 6);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()[..ID_LENGTH].to_string()
}

/// Screens a user-provided custom alias before it is used verbatim.
///
/// The HTTP layer already enforces length and charset on the request body;
/// this guards the service seam for callers that bypass the DTO, and rejects
/// aliases that would shadow system routes.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the alias is empty, too long,
/// contains characters outside `[A-Za-z0-9_-]`, or is a reserved word.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > 64 {
        return Err(AppError::bad_request(
            "Custom alias must be 1-64 characters",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom alias can only contain letters, digits, hyphens, and underscores",
            json!({ "short": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "short": alias }),
        ));
    }

    Ok(())
}
