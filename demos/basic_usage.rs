//! Basic logger usage example
//!
//! Demonstrates console logging at every priority, level changes, and the
//! line, field and lazy message kinds.
//!
//! Run with: cargo run --example basic_usage

use rust_log_sender::prelude::*;
use rust_log_sender::{format_message, info, warning};

fn main() -> Result<()> {
    println!("=== Rust Log Sender - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .name("demo")
        .level(LevelInfo::uniform(Priority::DEBUG))
        .build()?;

    println!("1. Logging at every priority:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.notice("This is a notice");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");
    logger.alert("This is an alert");
    logger.emergency("This is an emergency");

    println!("\n2. Raising the threshold to WARNING:");
    logger.set_level(LevelInfo::new(Priority::INFO, Priority::WARNING))?;
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    logger.warning("Warning message (visible)");

    println!("\n3. Other message kinds:");
    logger.log_line(Priority::ERROR, vec!["cache", "miss", "rate", "above", "40%"]);
    logger.log_fields(
        Priority::WARNING,
        "slow request",
        LogContext::new()
            .with_field("route", "/orders")
            .with_field("ms", 1840i64),
    );
    let attempts = 3;
    logger.send(&format_message!(Priority::ERROR, "gave up after {} attempts", attempts));

    println!("\n4. Macros:");
    warning!(logger, "Disk usage at {}%", 91);
    info!(logger, "Hidden by the threshold");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
