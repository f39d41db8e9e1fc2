//! Request counters for the user client.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    failures: AtomicU64,
    elapsed_ms: AtomicU64,
    users_fetched: AtomicU64,
}

/// Shared request counters; clones update the same totals.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing one HTTP request.
    pub fn start_request(&self) -> RequestTimer {
        RequestTimer {
            started: Instant::now(),
            metrics: self.clone(),
        }
    }

    pub fn record_user_fetched(&self) {
        self.counters.users_fetched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests(&self) -> u64 {
        self.counters.requests.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> u64 {
        self.counters.failures.load(Ordering::Relaxed)
    }

    pub fn users_fetched(&self) -> u64 {
        self.counters.users_fetched.load(Ordering::Relaxed)
    }

    /// Snapshot of every counter.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            requests: self.requests(),
            failures: self.failures(),
            elapsed_ms: self.counters.elapsed_ms.load(Ordering::Relaxed),
            users_fetched: self.users_fetched(),
        }
    }
}

/// Counter values at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSummary {
    pub requests: u64,
    pub failures: u64,
    /// Summed wall time of all requests
    pub elapsed_ms: u64,
    pub users_fetched: u64,
}

/// An in-flight request; counted once `finish` is called.
#[must_use = "a request is only counted once finished"]
pub struct RequestTimer {
    started: Instant,
    metrics: Metrics,
}

impl RequestTimer {
    pub fn finish(self, success: bool) {
        let counters = &self.metrics.counters;
        let elapsed = self.started.elapsed().as_millis() as u64;

        counters.requests.fetch_add(1, Ordering::Relaxed);
        counters.elapsed_ms.fetch_add(elapsed, Ordering::Relaxed);
        if !success {
            counters.failures.fetch_add(1, Ordering::Relaxed);
        }
    }
}
