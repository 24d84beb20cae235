//! Syslog failover example
//!
//! Points a syslog sender at an address nothing listens on. The sender comes
//! up degraded and every message lands on stdout with the failure attached.
//! Pass a reachable `host:port` to see primary delivery instead.
//!
//! Run with: cargo run --example syslog_failover -- [host:port]

use rust_log_sender::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Log Sender - Syslog Failover Example ===\n");

    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:1".to_string());

    let sender = SyslogSender::builder("failover-demo")
        .endpoint(SyslogEndpoint::Tcp(address.clone()))
        .level(LevelInfo::new(Priority::INFO, Priority::INFO))
        .build()?;

    println!("Connected to {}: {:?}\n", address, sender.state());

    sender.send(&StringMessage::new(Priority::ERROR, "invoice run failed"));
    sender.send(&StringMessage::unprioritized("sent at the default priority"));
    sender.send(&StringMessage::new(Priority::from_u8(65), "between named steps"));

    println!("\nRetrying the connection...");
    sender.reset();
    println!("State after reset: {:?}", sender.state());

    let metrics = sender.metrics();
    println!(
        "\nprimary={} fallback={} errors={}",
        metrics.primary_delivered(),
        metrics.fallback_delivered(),
        metrics.send_errors()
    );

    sender.close()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
