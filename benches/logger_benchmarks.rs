//! Criterion benchmarks for siglog

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use siglog::core::FormatterSlot;
use siglog::prelude::*;
use std::io;
use std::sync::Arc;
use std::thread;

fn sink_logger(level: LogLevel, mode: BatchMode) -> Logger {
    Logger::builder()
        .config(Arc::new(
            MemoryConfig::new()
                .with_level(level)
                .with_batch_mode(mode),
        ))
        .stdout_writer(io::sink())
        .build()
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.throughput(Throughput::Elements(1));

    let entry = LogEntry::new("connection accepted from 10.0.0.7", "SERVER", LogLevel::Info);

    group.bench_function("default_format", |b| {
        b.iter(|| siglog::default_format(black_box(&entry), LogLevel::Debug));
    });

    let slot = FormatterSlot::new();
    group.bench_function("formatter_slot", |b| {
        b.iter(|| slot.render(black_box(&entry), LogLevel::Debug));
    });

    group.finish();
}

// ============================================================================
// Submission Benchmarks
// ============================================================================

fn bench_submit_by_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit");
    group.throughput(Throughput::Elements(1));

    for mode in [BatchMode::None, BatchMode::Item, BatchMode::Byte, BatchMode::Time] {
        let logger = sink_logger(LogLevel::Debug, mode);
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, _| {
            b.iter(|| logger.submit(black_box("benchmark message"), "BENCH", LogLevel::Info));
        });
        let _ = logger.shutdown();
    }

    group.finish();
}

fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Error, BatchMode::None);
    group.bench_function("debug_at_error", |b| {
        b.iter(|| logger.submit(black_box("hidden"), "BENCH", LogLevel::Debug));
    });

    let off = sink_logger(LogLevel::None, BatchMode::None);
    group.bench_function("level_none", |b| {
        b.iter(|| off.submit(black_box("hidden"), "BENCH", LogLevel::Error));
    });

    group.finish();
}

// ============================================================================
// Throughput Benchmarks
// ============================================================================

fn bench_flush_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("flush_round_trip");

    for count in [10u64, 100, 1000] {
        let logger = sink_logger(LogLevel::Debug, BatchMode::None);
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                for _ in 0..count {
                    let _ = logger.submit("round trip", "BENCH", LogLevel::Info);
                }
                logger.flush();
            });
        });
        let _ = logger.shutdown();
    }

    group.finish();
}

fn bench_concurrent_producers(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_producers");
    let per_thread = 250u64;

    for threads in [2u64, 4, 8] {
        let logger = Arc::new(sink_logger(LogLevel::Debug, BatchMode::Item));
        group.throughput(Throughput::Elements(threads * per_thread));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        thread::spawn(move || {
                            for _ in 0..per_thread {
                                let _ = logger.submit("contended", "BENCH", LogLevel::Info);
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
                logger.flush_batch();
            });
        });
        let _ = logger.shutdown();
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rendering,
    bench_submit_by_mode,
    bench_filtered,
    bench_flush_round_trip,
    bench_concurrent_producers,
);
criterion_main!(benches);
