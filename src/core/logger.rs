//! Main logger implementation
//!
//! One dispatch worker thread serves every producer. Unbatched entries travel
//! through a bounded queue; item and byte batches are written by the
//! producer that completes them; time batches are written by the worker when
//! the window deadline passes.
//!
//! Lock order is batch state, then sink. Nothing takes them the other way.

use super::{
    batch_mode::BatchMode,
    batching::{BatchLimits, BatchState, DEFAULT_MAX_BYTES, DEFAULT_MAX_ITEMS, DEFAULT_MAX_WAIT},
    config::{ConfigProvider, EnvConfig},
    error::{LoggerError, Result},
    formatter::{FormatterSlot, LogFormatter},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    outstanding::Outstanding,
    timestamp::{Clock, SystemClock},
};
use crate::appenders::{ConsoleAppender, FileNaming, SinkWriter};
use crossbeam_channel::{bounded, never, select, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default capacity of the entry queue; producers block while it is full
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// State shared between producers and the dispatch worker
struct Shared {
    config: Arc<dyn ConfigProvider>,
    clock: Arc<dyn Clock>,
    formatter: FormatterSlot,
    limits: BatchLimits,
    batch: Mutex<BatchState>,
    sink: Mutex<SinkWriter>,
    outstanding: Outstanding,
    metrics: LoggerMetrics,
    /// Nudges the worker to re-read the batch deadline
    wake: Sender<()>,
    running: AtomicBool,
}

impl Shared {
    fn render(&self, entry: &LogEntry, configured: LogLevel) -> String {
        let (text, ok) = self.formatter.render(entry, configured);
        if !ok {
            self.metrics.record_format_failure();
        }
        text
    }

    /// Write to the configured destination. Failures are reported, counted
    /// and otherwise swallowed; they never reach the producer.
    fn write_out(&self, text: &str, entries: u64) {
        let result = self.sink.lock().write(text);
        match result {
            Ok(_) => {
                self.metrics.record_written(entries);
            }
            Err(e) => {
                eprintln!("[LOGGER ERROR] Failed to write {} log entries: {}", entries, e);
                self.metrics.record_dropped(entries);
            }
        }
    }

    fn write_pending(&self, batch: &mut BatchState) {
        if let Some((text, count)) = batch.pending.take() {
            self.metrics.record_batch();
            self.write_out(&text, count as u64);
        }
    }

    fn rotate_if_needed(&self) {
        let today = self.clock.today();
        match self.sink.lock().rotate_if_needed(today) {
            Ok(true) => {
                self.metrics.record_rotation();
            }
            Ok(false) => {}
            Err(e) => eprintln!("[LOGGER ERROR] {}", e),
        }
    }

    /// Item and byte modes: append, and write the batch from this thread
    /// once the threshold is reached.
    fn append_counted(&self, entry: &LogEntry, configured: LogLevel, mode: BatchMode) {
        let text = self.render(entry, configured);

        let mut batch = self.batch.lock();
        batch.pending.push(text);
        if self.limits.is_reached(mode, &batch.pending) {
            self.write_pending(&mut batch);
            drop(batch);
            self.rotate_if_needed();
        }
    }

    /// Time mode: append and push the window deadline out by `max_wait`.
    fn append_to_window(&self, entry: &LogEntry, configured: LogLevel) {
        let text = self.render(entry, configured);
        let wait = self.limits.max_wait();

        let mut batch = self.batch.lock();
        batch.pending.push(text);
        if wait.is_zero() {
            return;
        }
        if batch.timer.arm(Instant::now() + wait) {
            self.outstanding.add(1);
        }
        drop(batch);

        // A pending nudge is as good as a new one.
        let _ = self.wake.try_send(());
    }

    /// Worker side of an unbatched entry
    fn process_entry(&self, entry: LogEntry) {
        let configured = self.config.level();
        if entry.level().is_enabled_at(configured) {
            let text = self.render(&entry, configured);
            self.write_out(&text, 1);
        } else {
            self.metrics.record_filtered();
        }

        self.rotate_if_needed();
        self.outstanding.done();
    }

    /// Worker side of the batch timer
    fn fire_window(&self) {
        let mut batch = self.batch.lock();
        let now = Instant::now();
        if !batch.timer.is_due(now) {
            return;
        }

        self.write_pending(&mut batch);

        let wait = self.limits.max_wait();
        let next = (!wait.is_zero()).then(|| now + wait);
        let released = batch.timer.fire(next);
        drop(batch);

        self.rotate_if_needed();
        if released {
            self.outstanding.done();
        }
    }

    fn flush_batch(&self) {
        let mut batch = self.batch.lock();
        self.write_pending(&mut batch);
        let released = batch.timer.disarm();
        drop(batch);

        if released {
            self.outstanding.done();
        }
    }
}

fn run_worker(shared: Arc<Shared>, entries: Receiver<LogEntry>, wake: Receiver<()>) {
    loop {
        let deadline = shared.batch.lock().timer.deadline();
        let timer = match deadline {
            Some(at) => crossbeam_channel::at(at),
            None => never(),
        };

        select! {
            recv(entries) -> msg => match msg {
                Ok(entry) => shared.process_entry(entry),
                Err(_) => break,
            },
            recv(wake) -> _ => {}
            recv(timer) -> _ => shared.fire_window(),
        }
    }

    if let Err(e) = shared.sink.lock().close() {
        eprintln!("[LOGGER ERROR] Failed to close log destination: {}", e);
    }
}

/// The dispatch engine.
///
/// Share it between threads by reference or `Arc`; every method takes `&self`.
///
/// # Example
///
/// ```
/// use siglog::prelude::*;
/// use std::sync::Arc;
///
/// let config = Arc::new(MemoryConfig::new().with_level(LogLevel::Info));
/// let captured = MemoryWriter::new();
///
/// let logger = Logger::builder()
///     .config(config.clone())
///     .stdout_writer(captured.clone())
///     .build();
///
/// logger.submit("warn text", "SYSTEM", LogLevel::Warn).unwrap();
/// logger.flush();
/// assert!(captured.contents().ends_with("[SYSTEM][WARN] - warn text\n"));
///
/// logger.shutdown().unwrap();
/// ```
pub struct Logger {
    shared: Arc<Shared>,
    sender: RwLock<Option<Sender<LogEntry>>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
}

impl Logger {
    /// A logger configured from the `ENV_SL_*` environment variables
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Accept an entry.
    ///
    /// Entries above the configured level, or any entry while the level is
    /// `None`, are ignored. Blocks only while the queue is full.
    ///
    /// # Errors
    ///
    /// [`LoggerError::LoggerStopped`] after [`Logger::shutdown`]. Sink
    /// failures are never returned here.
    pub fn submit(
        &self,
        message: impl Into<String>,
        caller: impl Into<String>,
        level: LogLevel,
    ) -> Result<()> {
        if !self.shared.running.load(Ordering::Acquire) {
            return Err(LoggerError::LoggerStopped);
        }

        let configured = self.shared.config.level();
        if !level.is_enabled_at(configured) {
            return Ok(());
        }

        let entry = LogEntry::at(self.shared.clock.now(), message, caller, level);
        match self.shared.config.batch_mode() {
            BatchMode::None => self.enqueue(entry),
            mode @ (BatchMode::Item | BatchMode::Byte) => {
                self.shared.append_counted(&entry, configured, mode);
                Ok(())
            }
            BatchMode::Time => {
                self.shared.append_to_window(&entry, configured);
                Ok(())
            }
        }
    }

    fn enqueue(&self, entry: LogEntry) -> Result<()> {
        let sender = self.sender.read();
        let sender = sender.as_ref().ok_or(LoggerError::LoggerStopped)?;

        self.shared.outstanding.add(1);
        if sender.send(entry).is_err() {
            self.shared.outstanding.done();
            return Err(LoggerError::LoggerStopped);
        }
        Ok(())
    }

    /// Like [`Logger::submit`], reporting a stopped logger on stderr instead
    /// of returning it
    pub fn log(&self, level: LogLevel, caller: impl Into<String>, message: impl Into<String>) {
        if let Err(e) = self.submit(message, caller, level) {
            eprintln!("[LOGGER ERROR] Entry rejected: {}", e);
        }
    }

    /// Log an error message
    #[inline]
    pub fn error(&self, caller: impl Into<String>, message: impl Into<String>) {
        self.log(LogLevel::Error, caller, message);
    }

    /// Log a warning message
    #[inline]
    pub fn warn(&self, caller: impl Into<String>, message: impl Into<String>) {
        self.log(LogLevel::Warn, caller, message);
    }

    /// Log an info message
    #[inline]
    pub fn info(&self, caller: impl Into<String>, message: impl Into<String>) {
        self.log(LogLevel::Info, caller, message);
    }

    /// Log a debug message
    #[inline]
    pub fn debug(&self, caller: impl Into<String>, message: impl Into<String>) {
        self.log(LogLevel::Debug, caller, message);
    }

    /// Replace the rendering function; in-flight renders finish with the old one
    pub fn set_formatter<F>(&self, formatter: F)
    where
        F: Fn(&LogEntry, LogLevel) -> Result<String> + Send + Sync + 'static,
    {
        self.shared.formatter.replace(formatter);
    }

    /// Go back to [`default_format`](super::formatter::default_format)
    pub fn reset_formatter(&self) {
        self.shared.formatter.reset();
    }

    /// Entries per item batch; 0 disables the trigger
    pub fn set_max_items(&self, n: usize) {
        self.shared.limits.set_max_items(n);
    }

    /// Rendered bytes per byte batch; 0 disables the trigger
    pub fn set_max_bytes(&self, n: usize) {
        self.shared.limits.set_max_bytes(n);
    }

    /// Time batch window; zero leaves time batches pending until a manual
    /// flush or shutdown
    pub fn set_max_wait(&self, wait: Duration) {
        self.shared.limits.set_max_wait(wait);
    }

    pub fn max_items(&self) -> usize {
        self.shared.limits.max_items()
    }

    pub fn max_bytes(&self) -> usize {
        self.shared.limits.max_bytes()
    }

    pub fn max_wait(&self) -> Duration {
        self.shared.limits.max_wait()
    }

    /// Block until everything accepted so far has been processed.
    ///
    /// Covers queued entries and occupied time-batch windows. Item and byte
    /// batches that have not reached their threshold are not forced out;
    /// use [`Logger::flush_batch`] for that.
    pub fn flush(&self) {
        self.shared.outstanding.wait();
    }

    /// Write whatever sits in the pending batch now, whatever the mode
    pub fn flush_batch(&self) {
        self.shared.flush_batch();
    }

    /// Write the pending batch, wait for queued work, stop the worker and
    /// close the destination file.
    ///
    /// # Errors
    ///
    /// [`LoggerError::LoggerStopped`] if the logger was already shut down.
    pub fn shutdown(&self) -> Result<()> {
        if !self.shared.running.swap(false, Ordering::AcqRel) {
            return Err(LoggerError::LoggerStopped);
        }

        self.shared.flush_batch();
        self.flush();

        // Closing the queue lets the worker leave its loop.
        drop(self.sender.write().take());

        if let Some(handle) = self.worker.lock().take() {
            if let Err(e) = handle.join() {
                eprintln!("[LOGGER ERROR] Dispatch worker panicked during shutdown: {:?}", e);
            }
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Number of rendered entries waiting in the pending batch
    pub fn pending_len(&self) -> usize {
        self.shared.batch.lock().pending.len()
    }

    /// Accepted units not yet processed
    pub fn outstanding(&self) -> usize {
        self.shared.outstanding.current()
    }

    /// The dated file currently open, if any
    pub fn current_log_path(&self) -> Option<PathBuf> {
        self.shared.sink.lock().current_file().map(PathBuf::from)
    }

    /// Where file output goes for the tracked date
    pub fn dated_log_path(&self) -> PathBuf {
        self.shared.sink.lock().dated_path()
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use siglog::Logger;
    ///
    /// let logger = Logger::new();
    ///
    /// let metrics = logger.metrics();
    /// println!("Written: {}", metrics.total_written());
    /// println!("Dropped: {}", metrics.dropped_count());
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.is_running() {
            if let Err(e) = self.shutdown() {
                eprintln!("[LOGGER ERROR] Failed to shut down: {}", e);
            }
        }

        let dropped = self.shared.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} dropped logs (drop rate: {:.2}%)",
                dropped,
                self.shared.metrics.drop_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use siglog::prelude::*;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let logger = Logger::builder()
///     .config(Arc::new(MemoryConfig::new().with_level(LogLevel::Debug)))
///     .max_items(64)
///     .max_wait(Duration::from_millis(100))
///     .file_naming("service", "log")
///     .build();
/// # logger.shutdown().unwrap();
/// ```
pub struct LoggerBuilder {
    config: Option<Arc<dyn ConfigProvider>>,
    clock: Option<Arc<dyn Clock>>,
    formatter: Option<LogFormatter>,
    queue_capacity: usize,
    max_items: usize,
    max_bytes: usize,
    max_wait: Duration,
    stdout: Option<ConsoleAppender>,
    stderr: Option<ConsoleAppender>,
    naming: FileNaming,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: None,
            clock: None,
            formatter: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            max_items: DEFAULT_MAX_ITEMS,
            max_bytes: DEFAULT_MAX_BYTES,
            max_wait: DEFAULT_MAX_WAIT,
            stdout: None,
            stderr: None,
            naming: FileNaming::default(),
        }
    }

    /// Settings source; defaults to [`EnvConfig`]
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: Arc<dyn ConfigProvider>) -> Self {
        self.config = Some(config);
        self
    }

    /// Date source for rotation; defaults to [`SystemClock`]
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&LogEntry, LogLevel) -> Result<String> + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Capacity of the entry queue (minimum 1)
    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_items(mut self, n: usize) -> Self {
        self.max_items = n;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_bytes(mut self, n: usize) -> Self {
        self.max_bytes = n;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_wait(mut self, wait: Duration) -> Self {
        self.max_wait = wait;
        self
    }

    /// Stream used for [`Output::Stdout`](super::output::Output::Stdout)
    #[must_use = "builder methods return a new value"]
    pub fn stdout_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.stdout = Some(ConsoleAppender::with_writer("stdout", writer));
        self
    }

    /// Stream used for [`Output::Stderr`](super::output::Output::Stderr)
    #[must_use = "builder methods return a new value"]
    pub fn stderr_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.stderr = Some(ConsoleAppender::with_writer("stderr", writer));
        self
    }

    /// Name dated files `<prefix>-<MM-DD-YYYY>.<extension>`
    #[must_use = "builder methods return a new value"]
    pub fn file_naming(mut self, prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        self.naming = FileNaming::new(prefix, extension);
        self
    }

    /// Build the Logger and start its dispatch worker
    pub fn build(self) -> Logger {
        let config = self.config.unwrap_or_else(|| Arc::new(EnvConfig::new()));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let formatter = match self.formatter {
            Some(formatter) => {
                let slot = FormatterSlot::new();
                slot.replace_shared(formatter);
                slot
            }
            None => FormatterSlot::new(),
        };

        let sink = SinkWriter::new(
            Arc::clone(&config),
            self.stdout.unwrap_or_else(ConsoleAppender::stdout),
            self.stderr.unwrap_or_else(ConsoleAppender::stderr),
            self.naming,
            clock.as_ref(),
        );

        let (sender, receiver) = bounded(self.queue_capacity);
        let (wake_tx, wake_rx) = bounded(1);

        let shared = Arc::new(Shared {
            config,
            clock,
            formatter,
            limits: BatchLimits::new(self.max_items, self.max_bytes, self.max_wait),
            batch: Mutex::new(BatchState::default()),
            sink: Mutex::new(sink),
            outstanding: Outstanding::new(),
            metrics: LoggerMetrics::new(),
            wake: wake_tx,
            running: AtomicBool::new(true),
        });

        let worker_shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name("siglog-dispatch".to_string())
            .spawn(move || run_worker(worker_shared, receiver, wake_rx))
            .unwrap_or_else(|e| panic!("failed to spawn log dispatch worker: {}", e));

        Logger {
            shared,
            sender: RwLock::new(Some(sender)),
            worker: Mutex::new(Some(handle)),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryWriter;
    use crate::core::{BatchMode, ManualClock, MemoryConfig, Output};
    use tempfile::tempdir;

    fn logger_with(config: &Arc<MemoryConfig>) -> (Logger, MemoryWriter) {
        let out = MemoryWriter::new();
        let logger = Logger::builder()
            .config(config.clone())
            .stdout_writer(out.clone())
            .build();
        (logger, out)
    }

    #[test]
    fn test_unbatched_entry_reaches_stdout() {
        let config = Arc::new(MemoryConfig::new().with_level(LogLevel::Debug));
        let (logger, out) = logger_with(&config);

        logger.submit("hello world", "SYSTEM", LogLevel::Debug).unwrap();
        logger.flush();

        assert!(out.contents().ends_with("[SYSTEM][DEBUG] - hello world\n"));
        assert_eq!(logger.metrics().total_written(), 1);
        logger.shutdown().unwrap();
    }

    #[test]
    fn test_level_none_writes_nothing() {
        let config = Arc::new(MemoryConfig::new());
        let (logger, out) = logger_with(&config);

        for level in LogLevel::ALL {
            logger.submit("quiet", "SYSTEM", level).unwrap();
        }
        logger.flush();
        logger.shutdown().unwrap();

        assert_eq!(out.contents(), "");
    }

    #[test]
    fn test_level_switched_off_while_queued_still_releases_flush() {
        let config = Arc::new(MemoryConfig::new().with_level(LogLevel::Info));
        let (logger, out) = logger_with(&config);

        // Hold the sink so the worker parks on the first entry.
        let sink = logger.shared.sink.lock();
        for i in 0..5 {
            logger.submit(format!("m{}", i), "SYSTEM", LogLevel::Info).unwrap();
        }
        config.set_level(LogLevel::None);
        drop(sink);

        logger.flush();
        assert_eq!(logger.outstanding(), 0);
        assert!(out.lines().len() <= 1);
        logger.shutdown().unwrap();
    }

    #[test]
    fn test_item_batch_written_by_producer() {
        let config = Arc::new(
            MemoryConfig::new()
                .with_level(LogLevel::Debug)
                .with_batch_mode(BatchMode::Item),
        );
        let (logger, out) = logger_with(&config);
        logger.set_max_items(2);

        logger.submit("one", "SYSTEM", LogLevel::Debug).unwrap();
        assert_eq!(out.contents(), "");
        assert_eq!(logger.pending_len(), 1);

        logger.submit("two", "SYSTEM", LogLevel::Debug).unwrap();
        let lines = out.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[SYSTEM][DEBUG] - one"));
        assert!(lines[1].ends_with("[SYSTEM][DEBUG] - two"));
        assert_eq!(logger.metrics().batches_written(), 1);
        logger.shutdown().unwrap();
    }

    #[test]
    fn test_time_window_counts_one_unit() {
        let config = Arc::new(
            MemoryConfig::new()
                .with_level(LogLevel::Debug)
                .with_batch_mode(BatchMode::Time),
        );
        let (logger, out) = logger_with(&config);
        logger.set_max_wait(Duration::from_millis(30));

        logger.submit("a", "SYSTEM", LogLevel::Debug).unwrap();
        logger.submit("b", "SYSTEM", LogLevel::Debug).unwrap();
        logger.submit("c", "SYSTEM", LogLevel::Debug).unwrap();
        assert_eq!(logger.outstanding(), 1);

        logger.flush();
        assert_eq!(out.lines().len(), 3);
        assert_eq!(logger.metrics().batches_written(), 1);
        logger.shutdown().unwrap();
    }

    #[test]
    fn test_shutdown_twice_is_rejected() {
        let config = Arc::new(MemoryConfig::new().with_level(LogLevel::Info));
        let (logger, _out) = logger_with(&config);

        logger.shutdown().unwrap();
        assert!(matches!(logger.shutdown(), Err(LoggerError::LoggerStopped)));
        assert!(matches!(
            logger.submit("late", "SYSTEM", LogLevel::Info),
            Err(LoggerError::LoggerStopped)
        ));
        assert!(!logger.is_running());
    }

    #[test]
    fn test_file_output_rotates_after_processed_entry() {
        let dir = tempdir().unwrap();
        let config = Arc::new(
            MemoryConfig::new()
                .with_level(LogLevel::Info)
                .with_output(Output::File)
                .with_log_directory(dir.path()),
        );
        let clock = Arc::new(ManualClock::new());
        let logger = Logger::builder()
            .config(config.clone())
            .clock(clock.clone())
            .build();

        logger.info("SYSTEM", "first");
        logger.flush();
        let first_path = logger.current_log_path().unwrap();

        clock.advance_days(1);
        logger.info("SYSTEM", "second");
        logger.flush();
        let second_path = logger.current_log_path().unwrap();
        assert_ne!(first_path, second_path);
        assert_eq!(logger.metrics().rotations(), 1);

        logger.info("SYSTEM", "third");
        logger.shutdown().unwrap();

        let first = std::fs::read_to_string(first_path).unwrap();
        let second = std::fs::read_to_string(second_path).unwrap();
        assert!(first.contains("- first\n") && first.contains("- second\n"));
        assert!(second.contains("- third\n") && !second.contains("first"));
    }

    #[test]
    fn test_entries_are_stamped_by_injected_clock() {
        use chrono::{Local, TimeZone};

        let config = Arc::new(MemoryConfig::new().with_level(LogLevel::Info));
        let clock = Arc::new(ManualClock::at(
            Local.with_ymd_and_hms(2024, 2, 29, 23, 59, 58).unwrap(),
        ));
        let out = MemoryWriter::new();
        let logger = Logger::builder()
            .config(config)
            .clock(clock.clone())
            .stdout_writer(out.clone())
            .build();

        logger.info("CLOCK", "before");
        clock.set(Local.with_ymd_and_hms(2024, 3, 1, 0, 0, 1).unwrap());
        logger.info("CLOCK", "after");
        logger.shutdown().unwrap();

        assert_eq!(
            out.lines(),
            vec![
                "23-59-58-00: [CLOCK][INFO] - before",
                "00-00-01-00: [CLOCK][INFO] - after",
            ]
        );
    }
}
