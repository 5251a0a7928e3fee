//! # siglog
//!
//! An embeddable logging facility: callers submit leveled, captioned entries
//! and a single dispatch worker decides whether, where and when to write them.
//!
//! ## Features
//!
//! - **One ordered stream**: concurrent producers, one worker, blocking backpressure
//! - **Batching**: by entry count, by rendered bytes, or by time window
//! - **Dated files**: `<prefix>-<MM-DD-YYYY>.log`, rotated lazily at day change
//! - **Live configuration**: level, output and batch mode are read on every entry
//! - **Synchronous barriers**: `flush` waits for accepted work, `shutdown` drains and closes

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryWriter};
    pub use crate::core::{
        BatchMode, Clock, ConfigProvider, EnvConfig, LogEntry, LogFormatter, LogLevel, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, ManualClock, MemoryConfig, Output, Result,
    };
}

pub use appenders::{ConsoleAppender, DatedFileAppender, FileNaming, MemoryWriter};
pub use core::{
    default_format, Appender, BatchMode, Clock, ConfigProvider, EnvConfig, LogEntry,
    LogFormatter, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics, ManualClock,
    MemoryConfig, Output, Result, SystemClock, COULD_NOT_WRITE_ENTRY, DEFAULT_QUEUE_CAPACITY,
};
