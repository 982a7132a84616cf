//! Utility functions for identifier generation, URL screening, and request
//! handling.
//!
//! - [`alias`] - Short identifier generation and custom alias screening
//! - [`url_guard`] - Long-URL validation and https canonicalization
//! - [`client_ip`] - Client address extraction for quota accounting

pub mod alias;
pub mod client_ip;
pub mod url_guard;
