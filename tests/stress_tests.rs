//! Stress tests for the dispatch engine
//!
//! These tests verify:
//! - Per-producer ordering under concurrent submission
//! - No loss or duplication in counted batches under contention
//! - Concurrent flush callers all return
//! - Formatter replacement while traffic is flowing
//! - Small queue capacity with blocking producers

use siglog::appenders::MemoryWriter;
use siglog::core::{BatchMode, LogLevel, Logger, MemoryConfig};
use siglog::LogEntry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn capture(mode: BatchMode, queue_capacity: usize) -> (Arc<Logger>, MemoryWriter) {
    let out = MemoryWriter::new();
    let logger = Logger::builder()
        .config(Arc::new(
            MemoryConfig::new()
                .with_level(LogLevel::Debug)
                .with_batch_mode(mode),
        ))
        .queue_capacity(queue_capacity)
        .stdout_writer(out.clone())
        .formatter(|entry: &LogEntry, _| Ok(format!("{} {}\n", entry.caller(), entry.message())))
        .build();
    (Arc::new(logger), out)
}

fn spawn_producers(logger: &Arc<Logger>, threads: usize, per_thread: usize) {
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let logger = Arc::clone(logger);
            thread::spawn(move || {
                for i in 0..per_thread {
                    logger
                        .submit(i.to_string(), format!("T{}", t), LogLevel::Info)
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

/// caller -> sequence numbers in output order
fn sequences(out: &MemoryWriter) -> HashMap<String, Vec<usize>> {
    let mut seen: HashMap<String, Vec<usize>> = HashMap::new();
    for line in out.lines() {
        let (caller, n) = line.split_once(' ').expect("malformed line");
        seen.entry(caller.to_string())
            .or_default()
            .push(n.parse().expect("sequence number"));
    }
    seen
}

#[test]
fn test_concurrent_producers_keep_their_order() {
    let (logger, out) = capture(BatchMode::None, 16);

    spawn_producers(&logger, 8, 500);
    logger.flush();

    let seen = sequences(&out);
    assert_eq!(seen.len(), 8);
    for (caller, numbers) in seen {
        let expected: Vec<usize> = (0..500).collect();
        assert_eq!(numbers, expected, "{} out of order", caller);
    }
    logger.shutdown().unwrap();
}

#[test]
fn test_item_batches_under_contention() {
    let (logger, out) = capture(BatchMode::Item, 64);
    logger.set_max_items(7);

    spawn_producers(&logger, 6, 300);
    logger.shutdown().unwrap();

    let lines = out.lines();
    assert_eq!(lines.len(), 6 * 300);
    let unique: HashSet<&String> = lines.iter().collect();
    assert_eq!(unique.len(), lines.len(), "duplicated entries");

    for numbers in sequences(&out).values() {
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_byte_batches_under_contention() {
    let (logger, out) = capture(BatchMode::Byte, 64);
    logger.set_max_bytes(100);

    spawn_producers(&logger, 4, 250);
    logger.shutdown().unwrap();

    assert_eq!(out.lines().len(), 1000);
    assert_eq!(logger.metrics().total_written(), 1000);
}

#[test]
fn test_time_batches_under_contention() {
    let (logger, out) = capture(BatchMode::Time, 64);
    logger.set_max_wait(Duration::from_millis(5));

    spawn_producers(&logger, 4, 200);
    logger.flush();

    assert_eq!(out.lines().len(), 800);
    assert_eq!(logger.outstanding(), 0);
    logger.shutdown().unwrap();
}

#[test]
fn test_concurrent_flush_callers_return() {
    let (logger, out) = capture(BatchMode::None, 8);

    let producers: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..200 {
                    logger.submit(i.to_string(), format!("P{}", t), LogLevel::Info).unwrap();
                    if i % 50 == 0 {
                        logger.flush();
                    }
                }
            })
        })
        .collect();

    let flushers: Vec<_> = (0..4)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for _ in 0..20 {
                    logger.flush();
                }
            })
        })
        .collect();

    for handle in producers.into_iter().chain(flushers) {
        handle.join().unwrap();
    }
    logger.flush();

    assert_eq!(out.lines().len(), 800);
    logger.shutdown().unwrap();
}

#[test]
fn test_formatter_replaced_during_traffic() {
    let (logger, out) = capture(BatchMode::None, 32);

    let producer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..1000 {
                logger.submit(i.to_string(), "R", LogLevel::Info).unwrap();
            }
        })
    };

    for round in 0..50 {
        if round % 2 == 0 {
            logger.set_formatter(|entry: &LogEntry, _| Ok(format!("A {}\n", entry.message())));
        } else {
            logger.set_formatter(|entry: &LogEntry, _| Ok(format!("B {}\n", entry.message())));
        }
        thread::yield_now();
    }

    producer.join().unwrap();
    logger.flush();

    let lines = out.lines();
    assert_eq!(lines.len(), 1000);
    for (i, line) in lines.iter().enumerate() {
        let (tag, n) = line.split_once(' ').unwrap();
        assert!(matches!(tag, "R" | "A" | "B"), "torn line {:?}", line);
        assert_eq!(n, i.to_string());
    }
    logger.shutdown().unwrap();
}

#[test]
fn test_single_slot_queue_applies_backpressure() {
    let (logger, out) = capture(BatchMode::None, 1);

    spawn_producers(&logger, 3, 300);
    logger.shutdown().unwrap();

    assert_eq!(out.lines().len(), 900);
    assert_eq!(logger.metrics().dropped_count(), 0);
}
