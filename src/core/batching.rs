//! Batch accumulation and trigger decisions
//!
//! [`BatchState`] is the pending batch plus the time-window timer. The logger
//! keeps it behind one mutex so append-and-maybe-write and timer
//! stop/rearm are single critical sections.

use super::batch_mode::BatchMode;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

pub const DEFAULT_MAX_ITEMS: usize = 128;
pub const DEFAULT_MAX_BYTES: usize = 512;
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_millis(250);

/// Batch thresholds.
///
/// A zero threshold disables its trigger. Values are plain relaxed atomics:
/// set them before steady traffic starts; changing them mid-stream moves
/// batch boundaries unpredictably.
#[derive(Debug)]
pub struct BatchLimits {
    max_items: AtomicUsize,
    max_bytes: AtomicUsize,
    max_wait_nanos: AtomicU64,
}

impl BatchLimits {
    pub fn new(max_items: usize, max_bytes: usize, max_wait: Duration) -> Self {
        let limits = Self {
            max_items: AtomicUsize::new(max_items),
            max_bytes: AtomicUsize::new(max_bytes),
            max_wait_nanos: AtomicU64::new(0),
        };
        limits.set_max_wait(max_wait);
        limits
    }

    pub fn max_items(&self) -> usize {
        self.max_items.load(Ordering::Relaxed)
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes.load(Ordering::Relaxed)
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_nanos(self.max_wait_nanos.load(Ordering::Relaxed))
    }

    pub fn set_max_items(&self, n: usize) {
        self.max_items.store(n, Ordering::Relaxed);
    }

    pub fn set_max_bytes(&self, n: usize) {
        self.max_bytes.store(n, Ordering::Relaxed);
    }

    pub fn set_max_wait(&self, wait: Duration) {
        let nanos = u64::try_from(wait.as_nanos()).unwrap_or(u64::MAX);
        self.max_wait_nanos.store(nanos, Ordering::Relaxed);
    }

    /// Whether `pending` must be written now under the count-based modes.
    ///
    /// Always false for [`BatchMode::None`] and [`BatchMode::Time`].
    pub fn is_reached(&self, mode: BatchMode, pending: &PendingBatch) -> bool {
        match mode {
            BatchMode::Item => {
                let max = self.max_items();
                max > 0 && pending.len() >= max
            }
            BatchMode::Byte => {
                let max = self.max_bytes();
                max > 0 && pending.byte_len() >= max
            }
            BatchMode::None | BatchMode::Time => false,
        }
    }
}

impl Default for BatchLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITEMS, DEFAULT_MAX_BYTES, DEFAULT_MAX_WAIT)
    }
}

/// Rendered entries waiting for one combined write
#[derive(Debug, Default)]
pub struct PendingBatch {
    items: Vec<String>,
    bytes: usize,
}

impl PendingBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rendered: String) {
        self.bytes += rendered.len();
        self.items.push(rendered);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cumulative rendered length in bytes
    pub fn byte_len(&self) -> usize {
        self.bytes
    }

    /// Join and clear the batch, returning the text and how many entries it held
    pub fn take(&mut self) -> Option<(String, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let count = self.items.len();
        let joined = self.items.concat();
        self.items.clear();
        self.bytes = 0;
        Some((joined, count))
    }
}

/// Deadline of the time-batch window.
///
/// A window that holds content owns exactly one outstanding work unit;
/// moving the deadline of an occupied window never adds another.
#[derive(Debug, Default)]
pub struct BatchTimer {
    deadline: Option<Instant>,
    holds_unit: bool,
}

impl BatchTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn holds_unit(&self) -> bool {
        self.holds_unit
    }

    /// (Re)arm for `deadline`. Returns true when the caller must add a unit.
    pub fn arm(&mut self, deadline: Instant) -> bool {
        self.deadline = Some(deadline);
        !std::mem::replace(&mut self.holds_unit, true)
    }

    /// True once the current deadline has passed.
    ///
    /// A fire signal for a deadline that was since moved is stale and reads false.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= now)
    }

    /// Complete the current window and set the next tick.
    ///
    /// Returns true when a unit was held and must be released.
    pub fn fire(&mut self, next: Option<Instant>) -> bool {
        self.deadline = next;
        std::mem::replace(&mut self.holds_unit, false)
    }

    /// Stop the timer. Returns true when a unit was held and must be released.
    pub fn disarm(&mut self) -> bool {
        self.fire(None)
    }
}

#[derive(Debug, Default)]
pub struct BatchState {
    pub pending: PendingBatch,
    pub timer: BatchTimer,
}
