//! Outstanding-work counter backing `Logger::flush`

use parking_lot::{Condvar, Mutex};

/// Counts accepted work units that have not finished processing.
///
/// One unit per queued entry and one per occupied time-batch window.
/// [`Outstanding::wait`] blocks until the count drops to zero.
#[derive(Debug, Default)]
pub struct Outstanding {
    count: Mutex<usize>,
    idle: Condvar,
}

impl Outstanding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, units: usize) {
        *self.count.lock() += units;
    }

    /// Release one unit, waking waiters when the count reaches zero.
    ///
    /// # Panics
    ///
    /// Panics if no unit is outstanding: that means a unit was released twice.
    pub fn done(&self) {
        let mut count = self.count.lock();
        assert!(*count > 0, "outstanding work counter released below zero");
        *count -= 1;
        if *count == 0 {
            self.idle.notify_all();
        }
    }

    pub fn wait(&self) {
        let mut count = self.count.lock();
        while *count > 0 {
            self.idle.wait(&mut count);
        }
    }

    pub fn current(&self) -> usize {
        *self.count.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_wait_returns_immediately_when_idle() {
        let outstanding = Outstanding::new();
        outstanding.wait();
        assert_eq!(outstanding.current(), 0);
    }

    #[test]
    fn test_wait_blocks_until_all_done() {
        let outstanding = Arc::new(Outstanding::new());
        outstanding.add(3);

        let worker = {
            let outstanding = Arc::clone(&outstanding);
            thread::spawn(move || {
                for _ in 0..3 {
                    thread::sleep(Duration::from_millis(5));
                    outstanding.done();
                }
            })
        };

        outstanding.wait();
        assert_eq!(outstanding.current(), 0);
        worker.join().unwrap();
    }

    #[test]
    #[should_panic(expected = "released below zero")]
    fn test_done_without_add_panics() {
        Outstanding::new().done();
    }
}
