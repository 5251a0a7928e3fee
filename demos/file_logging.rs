//! File logging example
//!
//! Demonstrates dated log files in a configured directory.
//!
//! Run with: cargo run --example file_logging

use siglog::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== siglog - File Logging Example ===\n");

    let config = Arc::new(
        MemoryConfig::new()
            .with_level(LogLevel::Debug)
            .with_output(Output::File),
    );
    config.set_log_directory("logs")?;

    let logger = Logger::builder()
        .config(config)
        .file_naming("file-demo", "log")
        .build();

    println!("1. Logging application startup:");
    logger.info("MAIN", "Application started");
    logger.debug("CONFIG", "Loading configuration...");
    logger.warn("CONFIG", "Using default settings for some options");
    logger.info("DB", "Database connection established");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.info("WORKER", format!("Processing item {}/5", i));
        if i == 3 {
            logger.warn("WORKER", "Item 3 took longer than expected");
        }
    }

    logger.flush();
    let path = logger.dated_log_path();
    logger.shutdown()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check '{}' for the full log output", path.display());

    Ok(())
}
