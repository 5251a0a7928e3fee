//! Dated file appender with daily rotation
//!
//! Entries go to `<dir>/<prefix>-<MM-DD-YYYY>.<ext>`. The file for a date is
//! opened lazily on its first write, in create+append mode, inside the
//! directory the configuration names at that moment. Rotation is driven from
//! outside: the logger calls [`DatedFileAppender::rotate_if_needed`] after
//! each processed event.

use crate::core::appender::Appender;
use crate::core::config::ConfigProvider;
use crate::core::error::{LoggerError, Result};
use crate::core::timestamp;
use chrono::NaiveDate;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const DEFAULT_FILE_PREFIX: &str = "mycelia-log";
pub const DEFAULT_FILE_EXTENSION: &str = "log";

/// How dated log files are named
///
/// # Examples
///
/// ```
/// use siglog::appenders::FileNaming;
/// use chrono::NaiveDate;
/// use std::path::Path;
///
/// let naming = FileNaming::new("service", "txt");
/// let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// assert_eq!(
///     naming.path_for(Path::new("/var/log"), date),
///     Path::new("/var/log/service-01-31-2024.txt"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNaming {
    pub prefix: String,
    pub extension: String,
}

impl FileNaming {
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    pub fn file_name_for(&self, date: NaiveDate) -> String {
        format!(
            "{}-{}.{}",
            self.prefix,
            timestamp::format_date(date),
            self.extension
        )
    }

    pub fn path_for(&self, dir: &Path, date: NaiveDate) -> PathBuf {
        dir.join(self.file_name_for(date))
    }
}

impl Default for FileNaming {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_PREFIX, DEFAULT_FILE_EXTENSION)
    }
}

pub struct DatedFileAppender {
    config: Arc<dyn ConfigProvider>,
    naming: FileNaming,
    writer: Option<BufWriter<File>>,
    path: Option<PathBuf>,
    /// Calendar day the current (or next) file belongs to
    date: NaiveDate,
    /// Whether opening the file for `date` was already tried
    open_attempted: bool,
}

impl DatedFileAppender {
    pub fn new(config: Arc<dyn ConfigProvider>, naming: FileNaming, today: NaiveDate) -> Self {
        Self {
            config,
            naming,
            writer: None,
            path: None,
            date: today,
            open_attempted: false,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Path of the open file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    /// Path the file for `date` gets in the currently configured directory
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.naming.path_for(&self.config.log_directory(), date)
    }

    fn open(&mut self, date: NaiveDate) -> Result<()> {
        let path = self.path_for(date);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LoggerError::io_operation(
                        "create log directory",
                        format!("Failed to create directory '{}'", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::file_appender(path.display().to_string(), format!("Failed to open: {}", e))
            })?;

        self.writer = Some(BufWriter::new(file));
        self.path = Some(path);
        Ok(())
    }

    /// Flush and release the current handle
    pub fn close(&mut self) -> Result<()> {
        self.path = None;
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    /// Switch to the file for `today` if the tracked date is older.
    ///
    /// Returns `Ok(true)` when an open file was replaced by a new dated file.
    /// When no file was open only the tracked date moves. If the new file
    /// cannot be opened the old date is kept, writes fail, and the next call
    /// tries again.
    pub fn rotate_if_needed(&mut self, today: NaiveDate) -> Result<bool> {
        if today == self.date {
            return Ok(false);
        }

        let had_file = self.is_open();
        let old_path = self.path.clone();
        let previous = self.date;
        let closed = self.close();

        self.date = today;
        self.open_attempted = had_file;

        if let Err(e) = closed {
            return Err(LoggerError::file_rotation(
                old_path.map(|p| p.display().to_string()).unwrap_or_default(),
                format!("Failed to flush before rotation: {}", e),
            ));
        }

        if !had_file {
            return Ok(false);
        }

        if let Err(e) = self.open(today) {
            self.date = previous;
            return Err(LoggerError::file_rotation(
                self.path_for(today).display().to_string(),
                format!("Could not create next day log file: {}", e),
            ));
        }
        Ok(true)
    }
}

impl Appender for DatedFileAppender {
    fn write_batch(&mut self, text: &str) -> Result<()> {
        if self.writer.is_none() && !self.open_attempted {
            self.open_attempted = true;
            self.open(self.date)?;
        }

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("Could not open log file for writing."))?;

        writer.write_all(text.as_bytes()).map_err(|e| {
            LoggerError::file_appender(
                self.path.as_deref().map(|p| p.display().to_string()).unwrap_or_default(),
                format!("Failed to write log batch: {}", e),
            )
        })?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for DatedFileAppender {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
