//! Request counters for the elements endpoint
//!
//! - Counters only, monotonic
//! - Reset only on process start
//! - Relaxed atomics; exactness across threads is not required

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Collection (list) requests served
    list_requests: AtomicU64,
    /// Single-item requests served
    item_requests: AtomicU64,
    /// Item requests that found an element
    element_hits: AtomicU64,
    /// Item requests that found nothing
    element_misses: AtomicU64,
    /// Requests failed by the document registry
    resolution_failures: AtomicU64,
}

/// Point-in-time copy of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub list_requests: u64,
    pub item_requests: u64,
    pub element_hits: u64,
    pub element_misses: u64,
    pub resolution_failures: u64,
}

impl MetricsRegistry {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_list_requests(&self) {
        self.list_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_item_requests(&self) {
        self.item_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_element_hits(&self) {
        self.element_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_element_misses(&self) {
        self.element_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_resolution_failures(&self) {
        self.resolution_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Read all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            list_requests: self.list_requests.load(Ordering::Relaxed),
            item_requests: self.item_requests.load(Ordering::Relaxed),
            element_hits: self.element_hits.load(Ordering::Relaxed),
            element_misses: self.element_misses.load(Ordering::Relaxed),
            resolution_failures: self.resolution_failures.load(Ordering::Relaxed),
        }
    }
}
