//! Configuration providers
//!
//! The logger never caches configuration: every submit and every worker
//! event reads the current values through a [`ConfigProvider`], so changes
//! take effect on the next entry.

use super::{
    batch_mode::BatchMode,
    error::{LoggerError, Result},
    log_level::LogLevel,
    output::Output,
};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_SL_LOGGING_LEVEL: &str = "ENV_SL_LOGGING_LEVEL";
pub const ENV_SL_OUTPUT: &str = "ENV_SL_OUTPUT";
pub const ENV_SL_BATCH: &str = "ENV_SL_BATCH";
pub const ENV_SL_LOGDIR: &str = "ENV_SL_LOGDIR";

/// Source of the process-wide logging settings
pub trait ConfigProvider: Send + Sync {
    /// Priority threshold; [`LogLevel::None`] disables all logging.
    fn level(&self) -> LogLevel;
    fn output(&self) -> Output;
    fn batch_mode(&self) -> BatchMode;
    /// Directory the dated log files live in. Empty means the working directory.
    fn log_directory(&self) -> PathBuf;
}

fn create_log_directory(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| {
        LoggerError::io_operation(
            "create log directory",
            format!("Failed to create directory '{}'", path.display()),
            e,
        )
    })
}

/// Settings stored in environment variables.
///
/// Unset or unrecognized values read as the defaults: `NONE`, `STDOUT`,
/// `NONE` and the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfig;

impl EnvConfig {
    pub fn new() -> Self {
        Self
    }

    fn read<T: std::str::FromStr + Default>(var: &str) -> T {
        std::env::var(var)
            .ok()
            .and_then(|token| token.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_level(&self, level: LogLevel) {
        std::env::set_var(ENV_SL_LOGGING_LEVEL, level.to_str());
    }

    pub fn set_output(&self, output: Output) {
        std::env::set_var(ENV_SL_OUTPUT, output.to_str());
    }

    pub fn set_batch_mode(&self, mode: BatchMode) {
        std::env::set_var(ENV_SL_BATCH, mode.to_str());
    }

    /// Record the log directory and create it if it does not exist.
    pub fn set_log_directory(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::env::set_var(ENV_SL_LOGDIR, path);
        create_log_directory(path)
    }
}

impl ConfigProvider for EnvConfig {
    fn level(&self) -> LogLevel {
        Self::read(ENV_SL_LOGGING_LEVEL)
    }

    fn output(&self) -> Output {
        Self::read(ENV_SL_OUTPUT)
    }

    fn batch_mode(&self) -> BatchMode {
        Self::read(ENV_SL_BATCH)
    }

    fn log_directory(&self) -> PathBuf {
        std::env::var_os(ENV_SL_LOGDIR)
            .map(PathBuf::from)
            .unwrap_or_default()
    }
}

/// In-memory settings, independent per instance.
///
/// # Example
///
/// ```
/// use siglog::core::{BatchMode, ConfigProvider, LogLevel, MemoryConfig, Output};
///
/// let config = MemoryConfig::new()
///     .with_level(LogLevel::Info)
///     .with_output(Output::Stderr);
/// config.set_batch_mode(BatchMode::Item);
///
/// assert_eq!(config.level(), LogLevel::Info);
/// assert_eq!(config.batch_mode(), BatchMode::Item);
/// ```
#[derive(Debug, Default)]
pub struct MemoryConfig {
    level: RwLock<LogLevel>,
    output: RwLock<Output>,
    batch_mode: RwLock<BatchMode>,
    log_directory: RwLock<PathBuf>,
}

impl MemoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_level(self, level: LogLevel) -> Self {
        self.set_level(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_output(self, output: Output) -> Self {
        self.set_output(output);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_batch_mode(self, mode: BatchMode) -> Self {
        self.set_batch_mode(mode);
        self
    }

    /// Set the log directory without touching the filesystem
    #[must_use = "builder methods return a new value"]
    pub fn with_log_directory(self, path: impl Into<PathBuf>) -> Self {
        *self.log_directory.write() = path.into();
        self
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    pub fn set_output(&self, output: Output) {
        *self.output.write() = output;
    }

    pub fn set_batch_mode(&self, mode: BatchMode) {
        *self.batch_mode.write() = mode;
    }

    /// Record the log directory and create it if it does not exist.
    pub fn set_log_directory(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        create_log_directory(&path)?;
        *self.log_directory.write() = path;
        Ok(())
    }
}

impl ConfigProvider for MemoryConfig {
    fn level(&self) -> LogLevel {
        *self.level.read()
    }

    fn output(&self) -> Output {
        *self.output.read()
    }

    fn batch_mode(&self) -> BatchMode {
        *self.batch_mode.read()
    }

    fn log_directory(&self) -> PathBuf {
        self.log_directory.read().clone()
    }
}
