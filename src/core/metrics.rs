//! Logger metrics for observability
//!
//! Counters for monitoring logger health: entries written, entries lost to a
//! broken sink, batch writes, formatter failures and file rotations.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use siglog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written(3);
/// metrics.record_dropped(1);
///
/// assert_eq!(metrics.total_written(), 3);
/// assert_eq!(metrics.dropped_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries that reached their destination
    total_written: AtomicU64,

    /// Entries lost because the destination could not be written
    dropped_count: AtomicU64,

    /// Queued entries discarded because logging was switched off
    filtered_count: AtomicU64,

    /// Number of batch writes (item, byte, time or forced)
    batches_written: AtomicU64,

    /// Number of times a formatter failed and the sentinel was used
    format_failures: AtomicU64,

    /// Number of dated file rotations
    rotations: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_written: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
            batches_written: AtomicU64::new(0),
            format_failures: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_written(&self) -> u64 {
        self.total_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn batches_written(&self) -> u64 {
        self.batches_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn format_failures(&self) -> u64 {
        self.format_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rotations(&self) -> u64 {
        self.rotations.load(Ordering::Relaxed)
    }

    /// Record `count` entries written; returns the previous total
    #[inline]
    pub fn record_written(&self, count: u64) -> u64 {
        self.total_written.fetch_add(count, Ordering::Relaxed)
    }

    /// Record `count` entries lost to a failed write; returns the previous total
    #[inline]
    pub fn record_dropped(&self, count: u64) -> u64 {
        self.dropped_count.fetch_add(count, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_batch(&self) -> u64 {
        self.batches_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_format_failure(&self) -> u64 {
        self.format_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rotation(&self) -> u64 {
        self.rotations.fetch_add(1, Ordering::Relaxed)
    }

    /// Get drop rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been written or dropped yet.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.total_written() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.total_written.store(0, Ordering::Relaxed);
        self.dropped_count.store(0, Ordering::Relaxed);
        self.filtered_count.store(0, Ordering::Relaxed);
        self.batches_written.store(0, Ordering::Relaxed);
        self.format_failures.store(0, Ordering::Relaxed);
        self.rotations.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            total_written: AtomicU64::new(self.total_written()),
            dropped_count: AtomicU64::new(self.dropped_count()),
            filtered_count: AtomicU64::new(self.filtered_count()),
            batches_written: AtomicU64::new(self.batches_written()),
            format_failures: AtomicU64::new(self.format_failures()),
            rotations: AtomicU64::new(self.rotations()),
        }
    }
}
