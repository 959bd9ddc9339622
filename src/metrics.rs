use std::sync::atomic::{AtomicU64, Ordering};
use serde::Serialize;

#[derive(Debug, Default)]
pub struct Metrics {
    pub summaries: AtomicU64,
    pub failures: AtomicU64,
    pub rejected: AtomicU64,
    pub total_requests: AtomicU64,
    pub input_chars: AtomicU64,
    pub summary_chars: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {

        Self::default()

    }

    pub fn record_summary(&self, input_chars: u64, summary_chars: u64) {

        self.summaries.fetch_add(1, Ordering::Relaxed);
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.input_chars.fetch_add(input_chars, Ordering::Relaxed);
        self.summary_chars.fetch_add(summary_chars, Ordering::Relaxed);

    }

    pub fn record_failure(&self) {

        self.failures.fetch_add(1, Ordering::Relaxed);
        self.total_requests.fetch_add(1, Ordering::Relaxed);

    }

    pub fn record_rejected(&self) {

        self.rejected.fetch_add(1, Ordering::Relaxed);
        self.total_requests.fetch_add(1, Ordering::Relaxed);

    }

    pub fn snapshot(&self) -> MetricsSnapshot {

        MetricsSnapshot {
            summaries: self.summaries.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            total_requests: self.total_requests.load(Ordering::Relaxed),
            input_chars: self.input_chars.load(Ordering::Relaxed),
            summary_chars: self.summary_chars.load(Ordering::Relaxed),

        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub summaries: u64,
    pub failures: u64,
    pub rejected: u64,
    pub total_requests: u64,
    pub input_chars: u64,
    pub summary_chars: u64,
}

impl MetricsSnapshot {
    pub fn success_rate(&self) -> f64 {

        if self.total_requests == 0 {
            return 0.0;
        }
        (self.summaries as f64 / self.total_requests as f64) * 100.0

    }

    // how much shorter the summaries are than their inputs
    pub fn compression_ratio(&self) -> f64 {

        if self.input_chars == 0 {
            return 0.0;
        }
        self.summary_chars as f64 / self.input_chars as f64

    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_success_rate() {

        let metrics = Metrics::new();
        metrics.record_summary(1000, 100);
        metrics.record_summary(500, 50);
        metrics.record_failure();
        metrics.record_rejected();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_requests, 4);
        assert_eq!(snapshot.success_rate(), 50.0);

    }

    #[test]
    fn test_empty_metrics_have_zero_rates() {

        let snapshot = Metrics::new().snapshot();
        assert_eq!(snapshot.success_rate(), 0.0);
        assert_eq!(snapshot.compression_ratio(), 0.0);

    }

    #[test]
    fn test_compression_ratio() {

        let metrics = Metrics::new();
        metrics.record_summary(1000, 100);

        assert_eq!(metrics.snapshot().compression_ratio(), 0.1);

    }

}
