// Automaton metrics
//
// Lock-free counters updated on the build and scan paths of a shared
// `Automaton`.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one automaton instance
#[derive(Debug, Default)]
pub struct AutomatonMetrics {
    /// Successful builds (tables published)
    pub builds: AtomicU64,

    /// Rejected builds (previous table kept)
    pub failed_builds: AtomicU64,

    /// Completed scans
    pub scans: AtomicU64,

    /// Scans that hit an out-of-range symbol
    pub failed_scans: AtomicU64,

    /// Text symbols consumed by completed scans
    pub symbols_scanned: AtomicU64,

    /// Matches reported
    pub matches: AtomicU64,
}

impl AutomatonMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_build(&self) {
        self.builds.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed_build(&self) {
        self.failed_builds.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed scan - relaxed ordering for hot path
    pub fn record_scan(&self, symbols: usize, matches: usize) {
        self.scans.fetch_add(1, Ordering::Relaxed);
        self.symbols_scanned
            .fetch_add(symbols as u64, Ordering::Relaxed);
        self.matches.fetch_add(matches as u64, Ordering::Relaxed);
    }

    pub fn record_failed_scan(&self) {
        self.failed_scans.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            builds: self.builds.load(Ordering::Relaxed),
            failed_builds: self.failed_builds.load(Ordering::Relaxed),
            scans: self.scans.load(Ordering::Relaxed),
            failed_scans: self.failed_scans.load(Ordering::Relaxed),
            symbols_scanned: self.symbols_scanned.load(Ordering::Relaxed),
            matches: self.matches.load(Ordering::Relaxed),
        }
    }
}

/// Plain copy of [`AutomatonMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub builds: u64,
    pub failed_builds: u64,
    pub scans: u64,
    pub failed_scans: u64,
    pub symbols_scanned: u64,
    pub matches: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_snapshot() {
        let metrics = AutomatonMetrics::new();
        metrics.record_build();
        metrics.record_failed_build();
        metrics.record_scan(10, 2);
        metrics.record_scan(5, 0);
        metrics.record_failed_scan();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.builds, 1);
        assert_eq!(snapshot.failed_builds, 1);
        assert_eq!(snapshot.scans, 2);
        assert_eq!(snapshot.failed_scans, 1);
        assert_eq!(snapshot.symbols_scanned, 15);
        assert_eq!(snapshot.matches, 2);
    }
}
