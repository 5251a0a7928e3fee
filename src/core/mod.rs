//! Core logger types and traits

pub mod appender;
pub mod batch_mode;
pub mod batching;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod outstanding;
pub mod output;
pub mod timestamp;

pub use appender::Appender;
pub use batch_mode::BatchMode;
pub use batching::{
    BatchLimits, BatchState, BatchTimer, PendingBatch, DEFAULT_MAX_BYTES, DEFAULT_MAX_ITEMS,
    DEFAULT_MAX_WAIT,
};
pub use config::{ConfigProvider, EnvConfig, MemoryConfig};
pub use error::{LoggerError, Result};
pub use formatter::{default_format, FormatterSlot, LogFormatter, COULD_NOT_WRITE_ENTRY};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, DEFAULT_QUEUE_CAPACITY};
pub use metrics::LoggerMetrics;
pub use outstanding::Outstanding;
pub use output::Output;
pub use timestamp::{Clock, ManualClock, SystemClock};
