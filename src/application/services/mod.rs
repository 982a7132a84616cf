//! Business logic services for the application layer.

pub mod quota;
pub mod resolver;
pub mod shortener;

pub use quota::{QuotaGate, QuotaReceipt};
pub use resolver::ResolverService;
pub use shortener::{ShortenOutcome, ShortenerService};
