//! Observability for the elements service
//!
//! - Structured logging (JSON lines)
//! - Request counters
//!
//! Observability is read-only: it never changes what a request returns.
//!
//! ```ignore
//! use pagedata::observability::{Logger, MetricsRegistry};
//!
//! Logger::info("ELEMENTS_LISTED", &[("document_id", "42"), ("count", "3")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_list_requests();
//! ```

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
