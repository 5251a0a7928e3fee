//! Batch logging example
//!
//! Demonstrates item, byte and time batching and the flush barriers.
//!
//! Run with: cargo run --example batch_logging

use siglog::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== siglog - Batch Logging Example ===\n");

    let config = Arc::new(
        MemoryConfig::new()
            .with_level(LogLevel::Debug)
            .with_batch_mode(BatchMode::Item),
    );
    let logger = Arc::new(
        Logger::builder()
            .config(config.clone())
            .max_items(4)
            .max_bytes(256)
            .max_wait(Duration::from_millis(200))
            .build(),
    );

    println!("1. Item batches of 4 from several producers:");
    let handles: Vec<_> = (0..3)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..4 {
                    logger.info(format!("PRODUCER-{}", t), format!("item {}", i));
                }
            })
        })
        .collect();
    for handle in handles {
        let _ = handle.join();
    }

    println!("\n2. Byte batches of 256 bytes:");
    config.set_batch_mode(BatchMode::Byte);
    for i in 0..6 {
        logger.debug("BYTES", format!("payload chunk {}", i));
    }
    logger.flush_batch();

    println!("\n3. A 200ms time window:");
    config.set_batch_mode(BatchMode::Time);
    for i in 0..3 {
        logger.info("TIMER", format!("windowed entry {}", i));
    }
    println!("   (waiting for the window to close)");
    logger.flush();

    let metrics = logger.metrics();
    println!(
        "\nWritten: {}, batches: {}, dropped: {}",
        metrics.total_written(),
        metrics.batches_written(),
        metrics.dropped_count()
    );

    logger.shutdown()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
