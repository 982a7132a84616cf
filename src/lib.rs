//! # Shorty
//!
//! A minimal URL shortening service with per-client rate limiting, built
//! with Axum and Redis.
//!
//! ## Architecture
//!
//! This crate follows a layered structure with clear separation:
//!
//! - **Application Layer** ([`application`]) - Shortening, resolution, and
//!   quota workflows
//! - **Infrastructure Layer** ([`infrastructure`]) - The expiring key-value
//!   store (Redis)
//! - **API Layer** ([`api`]) - Axum handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random or custom short identifiers with collision detection
//! - Per-client hourly quota stored in the same expiring substrate
//! - Global visit counter incremented per resolution
//! - Https-forced URL canonicalization with loopback rejection
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export REDIS_URL="redis://localhost:6379/0"
//! export DOMAIN="s.example.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{QuotaGate, ResolverService, ShortenerService};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{KeyValueStore, StoreError, StoreResult};
    pub use crate::state::AppState;
}
