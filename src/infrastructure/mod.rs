//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the core services, providing
//! the concrete key-value store backing mappings, quotas, and the visit
//! counter.
//!
//! # Modules
//!
//! - [`store`] - Key-value store abstraction (Redis implementation)

pub mod store;
