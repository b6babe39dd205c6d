//! Basic metrics instrumentation for the directory client.
//!
//! Counters and duration tracking for HTTP exchanges and email resolutions.
//! Clones share the same counters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A shared monotonically increasing counter.
#[derive(Debug, Clone, Default)]
struct Counter(Arc<AtomicU64>);

impl Counter {
    fn add(&self, n: u64) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    fn clear(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

/// Metrics collector for tracking directory traffic.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// HTTP exchanges attempted, successful or not
    http_requests: Counter,

    /// Exchanges that ended in any error
    http_errors: Counter,

    /// Wall time of all exchanges in milliseconds
    http_duration_ms: Counter,

    /// Contacts decoded from list and item replies
    contacts_fetched: Counter,

    /// Email-to-id resolutions attempted
    lookups: Counter,

    /// Resolutions that found no matching contact
    lookup_misses: Counter,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests.add(1);
        self.http_duration_ms.add(duration.as_millis() as u64);
    }

    pub fn record_http_error(&self) {
        self.http_errors.add(1);
    }

    pub fn record_contacts_fetched(&self, count: usize) {
        self.contacts_fetched.add(count as u64);
    }

    /// Record an email-to-id resolution and whether it missed.
    ///
    /// Transport and status failures during resolution are not misses.
    pub fn record_lookup(&self, miss: bool) {
        self.lookups.add(1);
        if miss {
            self.lookup_misses.add(1);
        }
    }

    pub fn http_requests_total(&self) -> u64 {
        self.http_requests.get()
    }

    pub fn http_errors_total(&self) -> u64 {
        self.http_errors.get()
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_ms.get()
    }

    /// Average HTTP request duration in milliseconds, `0.0` before any request.
    pub fn http_duration_avg_ms(&self) -> f64 {
        match self.http_requests.get() {
            0 => 0.0,
            count => self.http_duration_ms.get() as f64 / count as f64,
        }
    }

    pub fn contacts_fetched_total(&self) -> u64 {
        self.contacts_fetched.get()
    }

    pub fn lookups_total(&self) -> u64 {
        self.lookups.get()
    }

    pub fn lookup_misses_total(&self) -> u64 {
        self.lookup_misses.get()
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        for counter in [
            &self.http_requests,
            &self.http_errors,
            &self.http_duration_ms,
            &self.contacts_fetched,
            &self.lookups,
            &self.lookup_misses,
        ] {
            counter.clear();
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            contacts_fetched_total: self.contacts_fetched_total(),
            lookups_total: self.lookups_total(),
            lookup_misses_total: self.lookup_misses_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub contacts_fetched_total: u64,
    pub lookups_total: u64,
    pub lookup_misses_total: u64,
}

/// Times one HTTP exchange and records it when completed.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    pub fn complete(self) {
        self.metrics.record_http_request(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_http_request(self.start.elapsed());
        self.metrics.record_http_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fresh_metrics_are_zero() {
        let summary = Metrics::new().summary();
        assert_eq!(summary.http_requests_total, 0);
        assert_eq!(summary.lookups_total, 0);
        assert_eq!(summary.http_duration_avg_ms, 0.0);
    }

    #[test]
    fn test_request_durations() {
        let metrics = Metrics::new();
        metrics.record_http_request(Duration::from_millis(40));
        metrics.record_http_request(Duration::from_millis(80));

        assert_eq!(metrics.http_requests_total(), 2);
        assert_eq!(metrics.http_duration_total_ms(), 120);
        assert_eq!(metrics.http_duration_avg_ms(), 60.0);
    }

    #[test]
    fn test_record_lookup() {
        let metrics = Metrics::new();
        metrics.record_lookup(false);
        metrics.record_lookup(true);
        metrics.record_lookup(true);

        assert_eq!(metrics.lookups_total(), 3);
        assert_eq!(metrics.lookup_misses_total(), 2);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = Metrics::new();
        let clone = metrics.clone();
        clone.record_contacts_fetched(4);

        assert_eq!(metrics.contacts_fetched_total(), 4);
    }

    #[test]
    fn test_reset() {
        let metrics = Metrics::new();
        metrics.record_http_request(Duration::from_millis(10));
        metrics.record_http_error();
        metrics.record_contacts_fetched(5);
        metrics.record_lookup(true);

        metrics.reset();

        assert_eq!(metrics.summary(), Metrics::new().summary());
    }

    #[test]
    fn test_http_timer() {
        let metrics = Metrics::new();
        HttpTimer::new(metrics.clone()).complete();
        HttpTimer::new(metrics.clone()).complete_with_error();

        assert_eq!(metrics.http_requests_total(), 2);
        assert_eq!(metrics.http_errors_total(), 1);
    }

    #[test]
    fn test_concurrent_recording() {
        let metrics = Metrics::new();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let metrics = metrics.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        metrics.record_lookup(false);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.lookups_total(), 200);
    }
}
