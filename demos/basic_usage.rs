//! Basic logger usage example
//!
//! Demonstrates level filtering, live reconfiguration and the logging macros.
//!
//! Run with: cargo run --example basic_usage

use siglog::prelude::*;
use siglog::{info, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== siglog - Basic Usage Example ===\n");

    let config = Arc::new(MemoryConfig::new().with_level(LogLevel::Debug));
    let logger = Logger::builder().config(config.clone()).build();

    println!("1. Logging at different levels:");
    logger.debug("MAIN", "This is a debug message");
    logger.info("MAIN", "This is an info message");
    logger.warn("MAIN", "This is a warning message");
    logger.error("MAIN", "This is an error message");
    logger.flush();

    println!("\n2. Raising the threshold to WARN while running:");
    config.set_level(LogLevel::Warn);
    logger.debug("MAIN", "Debug message (hidden)");
    logger.info("MAIN", "Info message (hidden)");
    warn!(logger, "MAIN", "Warning message (visible), attempt {}", 2);
    logger.flush();

    println!("\n3. Switching output to stderr:");
    config.set_output(Output::Stderr);
    logger.submit("Written to stderr", "MAIN", LogLevel::Error)?;
    logger.flush();

    println!("\n4. Turning logging off:");
    config.set_level(LogLevel::None);
    info!(logger, "MAIN", "Nobody sees this");

    logger.shutdown()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
