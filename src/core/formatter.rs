//! Entry rendering
//!
//! The active formatter lives in a [`FormatterSlot`]. Rendering holds the
//! read guard for the whole call, so a concurrent [`FormatterSlot::replace`]
//! waits for in-flight renders and no producer ever sees half a swap.

use super::{
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    timestamp,
};
use parking_lot::RwLock;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Written in place of an entry whose formatter failed
pub const COULD_NOT_WRITE_ENTRY: &str = "Could not write entry to log buffer.";

/// Turns an entry into the text written to the destination.
///
/// The second argument is the currently configured level.
pub type LogFormatter = Arc<dyn Fn(&LogEntry, LogLevel) -> Result<String> + Send + Sync>;

/// Renders `<HH-MM-SS-CC>: [<caller>][<LEVEL>] - <message>\n` from the entry's own time
///
/// # Example
///
/// ```
/// use siglog::core::{default_format, LogEntry, LogLevel};
///
/// let entry = LogEntry::new("warn text", "SYSTEM", LogLevel::Warn);
/// let line = default_format(&entry, LogLevel::Info).unwrap();
/// assert!(line.ends_with("[SYSTEM][WARN] - warn text\n"));
/// ```
pub fn default_format(entry: &LogEntry, _configured: LogLevel) -> Result<String> {
    Ok(format!(
        "{}: [{}][{}] - {}",
        timestamp::format_time(&entry.time()),
        entry.caller(),
        entry.level().to_str(),
        entry.normalized_message()
    ))
}

pub struct FormatterSlot {
    inner: RwLock<LogFormatter>,
}

impl FormatterSlot {
    pub fn new() -> Self {
        Self::with_formatter(default_format)
    }

    pub fn with_formatter<F>(formatter: F) -> Self
    where
        F: Fn(&LogEntry, LogLevel) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            inner: RwLock::new(Arc::new(formatter)),
        }
    }

    pub fn replace<F>(&self, formatter: F)
    where
        F: Fn(&LogEntry, LogLevel) -> Result<String> + Send + Sync + 'static,
    {
        self.replace_shared(Arc::new(formatter));
    }

    pub fn replace_shared(&self, formatter: LogFormatter) {
        *self.inner.write() = formatter;
    }

    pub fn reset(&self) {
        self.replace(default_format);
    }

    /// Render an entry, never failing.
    ///
    /// Formatter errors and panics are reported and replaced by
    /// [`COULD_NOT_WRITE_ENTRY`]; the flag tells the caller which happened.
    pub fn render(&self, entry: &LogEntry, configured: LogLevel) -> (String, bool) {
        let formatter = self.inner.read();
        let outcome = catch_unwind(AssertUnwindSafe(|| formatter(entry, configured)));
        drop(formatter);

        match outcome {
            Ok(Ok(text)) => (text, true),
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Formatter failed for '{}': {}", entry.caller(), e);
                (COULD_NOT_WRITE_ENTRY.to_string(), false)
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                let err = LoggerError::formatter("custom", panic_msg);
                eprintln!("[LOGGER CRITICAL] {}", err);
                (COULD_NOT_WRITE_ENTRY.to_string(), false)
            }
        }
    }
}

impl Default for FormatterSlot {
    fn default() -> Self {
        Self::new()
    }
}
