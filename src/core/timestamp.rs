//! Clock and timestamp layouts
//!
//! Dated file names use `MM-DD-YYYY`; the default formatter stamps entries
//! with the local wall clock as `HH-MM-SS-CC` (CC = centiseconds).

use chrono::{DateTime, Local, NaiveDate, Timelike};
use parking_lot::RwLock;

/// strftime layout for the date embedded in log file names
pub const DATE_LAYOUT: &str = "%m-%d-%Y";

/// strftime layout for the entry time token, before the centisecond suffix
pub const TIME_LAYOUT: &str = "%H-%M-%S";

/// Source of "now" for rotation decisions
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to
///
/// # Example
///
/// ```
/// use siglog::core::{Clock, ManualClock};
/// use chrono::Days;
///
/// let clock = ManualClock::new();
/// let today = clock.today();
/// clock.advance_days(1);
/// assert_eq!(clock.today(), today.checked_add_days(Days::new(1)).unwrap());
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<DateTime<Local>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::at(Local::now())
    }

    pub fn at(now: DateTime<Local>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Local>) {
        *self.now.write() = now;
    }

    pub fn advance_days(&self, days: u64) {
        let mut now = self.now.write();
        if let Some(next) = now.checked_add_days(chrono::Days::new(days)) {
            *now = next;
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.read()
    }
}

/// Format a date the way log file names carry it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_LAYOUT).to_string()
}

/// Render the entry time token, e.g. `14-03-59-07`
pub fn format_time(now: &DateTime<Local>) -> String {
    let centis = (now.nanosecond() % 1_000_000_000) / 10_000_000;
    format!("{}-{:02}", now.format(TIME_LAYOUT), centis)
}
