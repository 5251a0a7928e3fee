//! Console appender implementation

use crate::core::{Appender, LoggerError, Result};
use std::io::{self, Write};

/// Writes batches to a console stream.
///
/// The stream is any `Write` so hosts (and tests) can redirect it; the
/// default constructors bind the process stdout and stderr.
pub struct ConsoleAppender {
    name: String,
    writer: Box<dyn Write + Send>,
}

impl ConsoleAppender {
    pub fn stdout() -> Self {
        Self::with_writer("stdout", io::stdout())
    }

    pub fn stderr() -> Self {
        Self::with_writer("stderr", io::stderr())
    }

    /// Bind the appender to a custom stream
    ///
    /// # Example
    ///
    /// ```
    /// use siglog::appenders::{ConsoleAppender, MemoryWriter};
    /// use siglog::Appender;
    ///
    /// let buffer = MemoryWriter::new();
    /// let mut appender = ConsoleAppender::with_writer("captured", buffer.clone());
    /// appender.write_batch("hello\n").unwrap();
    /// assert_eq!(buffer.contents(), "hello\n");
    /// ```
    pub fn with_writer<W: Write + Send + 'static>(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer: Box::new(writer),
        }
    }
}

impl Appender for ConsoleAppender {
    fn write_batch(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).map_err(|e| {
            LoggerError::io_operation("writing console batch", format!("{} stream", self.name), e)
        })?;
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
