//! Cache metrics and observability module.
//!
//! Each cache owns its own counters so tests can assert hits and misses on an
//! isolated instance instead of a process-wide singleton.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hit/miss/eviction counters for one cache.
#[derive(Debug, Default)]
pub struct CacheMetrics {
    /// Number of lookups answered from the cache
    hits: AtomicUsize,

    /// Number of lookups that had to compute (or fetch) a fresh value
    misses: AtomicUsize,

    /// Number of entries dropped to respect a configured bound
    evictions: AtomicUsize,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an eviction.
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn evictions(&self) -> usize {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let misses = self.misses();
        let total_queries = hits + misses;
        let hit_rate = if total_queries > 0 {
            (hits as f64 / total_queries as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            misses,
            evictions: self.evictions(),
            hit_rate,
        }
    }
}

/// Snapshot of one cache's counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Number of cache hits
    pub hits: usize,

    /// Number of cache misses
    pub misses: usize,

    /// Number of bound-driven evictions
    pub evictions: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,
}
