//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// A timestamped, leveled, captioned message.
///
/// Entries are immutable; the trailing line terminator is normalized when the
/// entry is formatted, so formatting the same entry twice gives the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    caller: String,
    message: String,
    level: LogLevel,
    time: DateTime<Local>,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    pub fn new(message: impl Into<String>, caller: impl Into<String>, level: LogLevel) -> Self {
        Self::at(Local::now(), message, caller, level)
    }

    /// Create an entry stamped with `time`
    pub fn at(
        time: DateTime<Local>,
        message: impl Into<String>,
        caller: impl Into<String>,
        level: LogLevel,
    ) -> Self {
        Self {
            caller: caller.into(),
            message: message.into(),
            level,
            time,
        }
    }

    /// What the entry came from: a file, struct, stream and so on
    pub fn caller(&self) -> &str {
        &self.caller
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The configured level needed for this entry to be written
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// When the entry was submitted
    pub fn time(&self) -> DateTime<Local> {
        self.time
    }

    /// The message with its trailing line terminators collapsed into one `\n`
    pub fn normalized_message(&self) -> String {
        let body = self.message.trim_end_matches(['\n', '\r']);
        let mut out = String::with_capacity(body.len() + 1);
        out.push_str(body);
        out.push('\n');
        out
    }
}
