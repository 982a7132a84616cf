//! Application layer services implementing the core workflows.
//!
//! This layer orchestrates store round trips, validation, and quota rules,
//! and provides a clean API for the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener::ShortenerService`] - Short link creation
//! - [`services::resolver::ResolverService`] - Short link resolution
//! - [`services::quota::QuotaGate`] - Per-client request budget

pub mod services;
