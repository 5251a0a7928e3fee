//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes the logger, the caller label, then `format!` arguments.
//!
//! # Examples
//!
//! ```
//! use siglog::prelude::*;
//! use siglog::info;
//!
//! let logger = Logger::new();
//!
//! info!(logger, "SERVER", "started");
//!
//! let port = 8080;
//! info!(logger, "SERVER", "listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use siglog::prelude::*;
/// # let logger = Logger::new();
/// use siglog::log;
/// log!(logger, LogLevel::Info, "SYSTEM", "Simple message");
/// log!(logger, LogLevel::Error, "SYSTEM", "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $caller:expr, $($arg:tt)+) => {
        $logger.log($level, $caller, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use siglog::prelude::*;
/// # let logger = Logger::new();
/// use siglog::debug;
/// debug!(logger, "CACHE", "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $caller:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $caller, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $caller:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $caller, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $caller:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $caller, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use siglog::prelude::*;
/// # let logger = Logger::new();
/// use siglog::error;
/// error!(logger, "DB", "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $caller:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $caller, $($arg)+)
    };
}
