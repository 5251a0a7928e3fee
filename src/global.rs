//! Process-wide logger handle
//!
//! Install one [`Logger`] at startup with [`init`] (or [`init_from_env`]) and
//! tear it down with [`shutdown`] before exit. Nothing is created lazily:
//! until `init` runs, the free functions report [`LoggerError::NotInitialized`].
//!
//! ```no_run
//! use siglog::{global, LogLevel};
//!
//! global::init_from_env().unwrap();
//! global::log_entry("service started", "MAIN", LogLevel::Info).unwrap();
//! global::shutdown().unwrap();
//! ```

use crate::core::{LogEntry, LogLevel, Logger, LoggerError, Result};
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide logger
///
/// # Errors
///
/// [`LoggerError::AlreadyInitialized`] if a logger is already installed; the
/// rejected logger is shut down.
pub fn init(logger: Logger) -> Result<&'static Logger> {
    GLOBAL
        .set(logger)
        .map_err(|_rejected| LoggerError::AlreadyInitialized)?;
    global().ok_or(LoggerError::NotInitialized)
}

/// Install a logger reading the `ENV_SL_*` environment variables
pub fn init_from_env() -> Result<&'static Logger> {
    init(Logger::new())
}

pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}

fn installed() -> Result<&'static Logger> {
    global().ok_or(LoggerError::NotInitialized)
}

/// Submit through the process-wide logger
pub fn log_entry(message: impl Into<String>, caller: impl Into<String>, level: LogLevel) -> Result<()> {
    installed()?.submit(message, caller, level)
}

pub fn set_formatter<F>(formatter: F) -> Result<()>
where
    F: Fn(&LogEntry, LogLevel) -> Result<String> + Send + Sync + 'static,
{
    installed()?.set_formatter(formatter);
    Ok(())
}

/// Block until the process-wide logger has processed everything accepted so far
pub fn flush() -> Result<()> {
    installed()?.flush();
    Ok(())
}

/// Final flush, drain and close of the process-wide logger
pub fn shutdown() -> Result<()> {
    installed()?.shutdown()
}
