//! File logging example
//!
//! Writes plain lines and JSON lines side by side through a fan-out sender.
//!
//! Run with: cargo run --example file_logging

use rust_log_sender::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Log Sender - File Logging Example ===\n");

    std::fs::create_dir_all("logs")?;

    let plain: Arc<dyn Sender> = Arc::new(FileSender::new(
        "orders",
        "logs/orders.log",
        LevelInfo::uniform(Priority::INFO),
    )?);
    let json: Arc<dyn Sender> = Arc::new(JsonSender::file(
        "orders",
        "logs/orders.jsonl",
        LevelInfo::uniform(Priority::INFO),
    )?);

    let logger = Logger::new(MultiSender::new(
        "orders",
        LevelInfo::uniform(Priority::INFO),
        vec![plain, json],
    )?);

    for id in 0..5 {
        logger.log_fields(
            Priority::INFO,
            "order placed",
            LogContext::new()
                .with_field("order_id", id as i64)
                .with_field("total", 19.99 * (id + 1) as f64),
        );
    }
    logger.error("payment provider timed out");
    logger.debug("not written: below threshold");

    logger.close()?;

    println!("Wrote logs/orders.log and logs/orders.jsonl");
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
