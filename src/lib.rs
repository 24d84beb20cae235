//! # Rust Log Sender
//!
//! A leveled logging dispatch core. Messages are composers: they carry a
//! priority and render lazily, at most once. Senders filter them against a
//! per-sender level and deliver them to a console, a file, a channel, a
//! callback or syslog. The syslog sender falls back to standard output when
//! its primary transport is unavailable.
//!
//! ## Features
//!
//! - **Lazy rendering**: messages the level gate rejects are never formatted
//! - **Swappable senders**: console, file, JSON, syslog, in-process, callback and fan-out
//! - **Failover**: syslog delivery errors go to a fallback, never to the caller
//! - **Thread safe**: every sender can be shared between threads
//!
//! ## Example
//!
//! ```
//! use rust_log_sender::prelude::*;
//!
//! let sender = InternalSender::new("app", LevelInfo::new(Priority::INFO, Priority::WARNING)).unwrap();
//!
//! sender.send(&StringMessage::new(Priority::ERROR, "disk full"));
//! sender.send(&StringMessage::new(Priority::INFO, "heartbeat"));
//!
//! assert!(sender.get_message().unwrap().logged);
//! assert!(!sender.get_message().unwrap().logged);
//! ```

pub mod core;
pub mod macros;
pub mod message;
pub mod senders;

pub mod prelude {
    pub use crate::core::{
        Composer, FieldValue, LevelInfo, LogContext, Logger, LoggerBuilder, LoggerError,
        Priority, Result, Sender, SenderMetrics, SenderType,
    };
    pub use crate::message::{FieldsMessage, LazyMessage, LineMessage, StringMessage};
    pub use crate::senders::{
        BootstrapSender, CallbackSender, FailoverState, FileSender, InternalSender, JsonSender,
        MultiSender, NativeSender, SyslogEndpoint, SyslogSender,
    };
}

pub use crate::core::{
    should_log, Base, Composer, FallbackLogger, FieldValue, LevelInfo, LogContext, Logger,
    LoggerBuilder, LoggerError, Metadata, Priority, Result, Sender, SenderBase, SenderMetrics,
    SenderType,
};
pub use crate::message::{FieldsMessage, LazyMessage, LineMessage, StringMessage};
pub use crate::senders::{
    BootstrapSender, CallbackSender, FailoverState, FileSender, InternalMessage, InternalSender,
    JsonSender, MultiSender, NativeSender, Severity, SyslogEndpoint, SyslogSender,
    SyslogSenderBuilder, SyslogTransport,
};
