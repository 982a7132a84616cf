//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Request/response data transfer objects
//! - [`handlers`] - Axum request handlers
//! - [`middleware`] - Tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
