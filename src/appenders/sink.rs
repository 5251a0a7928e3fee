//! Destination selection
//!
//! [`SinkWriter`] owns one appender per [`Output`] and sends each write to
//! whichever the configuration names at that moment.

use super::{ConsoleAppender, DatedFileAppender, FileNaming};
use crate::core::{Appender, Clock, ConfigProvider, Output, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct SinkWriter {
    config: Arc<dyn ConfigProvider>,
    stdout: ConsoleAppender,
    stderr: ConsoleAppender,
    file: DatedFileAppender,
}

impl SinkWriter {
    pub fn new(
        config: Arc<dyn ConfigProvider>,
        stdout: ConsoleAppender,
        stderr: ConsoleAppender,
        naming: FileNaming,
        clock: &dyn Clock,
    ) -> Self {
        let file = DatedFileAppender::new(Arc::clone(&config), naming, clock.today());
        Self {
            config,
            stdout,
            stderr,
            file,
        }
    }

    /// Write one rendered entry or batch to the configured output
    pub fn write(&mut self, text: &str) -> Result<Output> {
        let output = self.config.output();
        self.appender_for(output).write_batch(text)?;
        Ok(output)
    }

    fn appender_for(&mut self, output: Output) -> &mut dyn Appender {
        match output {
            Output::Stdout => &mut self.stdout,
            Output::Stderr => &mut self.stderr,
            Output::File => &mut self.file,
        }
    }

    pub fn rotate_if_needed(&mut self, today: NaiveDate) -> Result<bool> {
        self.file.rotate_if_needed(today)
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.file.path()
    }

    /// Path of the dated file for the tracked date in the configured directory
    pub fn dated_path(&self) -> PathBuf {
        self.file.path_for(self.file.date())
    }

    /// Flush everything and release the file handle
    pub fn close(&mut self) -> Result<()> {
        self.stdout.flush()?;
        self.stderr.flush()?;
        self.file.close()
    }
}
