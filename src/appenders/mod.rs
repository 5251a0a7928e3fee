//! Appender implementations

pub mod console;
pub mod dated_file;
pub mod memory;
pub mod sink;

pub use console::ConsoleAppender;
pub use dated_file::{DatedFileAppender, FileNaming, DEFAULT_FILE_EXTENSION, DEFAULT_FILE_PREFIX};
pub use memory::MemoryWriter;
pub use sink::SinkWriter;

pub use crate::core::Appender;
