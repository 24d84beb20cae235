//! Sender implementations

pub mod bootstrap;
pub mod callback;
pub mod file;
pub mod internal;
pub mod json;
pub mod multi;
pub mod native;
pub mod syslog;

pub use bootstrap::BootstrapSender;
pub use callback::CallbackSender;
pub use file::FileSender;
pub use internal::{InternalMessage, InternalSender};
pub use json::JsonSender;
pub use multi::MultiSender;
pub use native::NativeSender;
pub use syslog::{
    FailoverState, Severity, SyslogEndpoint, SyslogSender, SyslogSenderBuilder, SyslogTransport,
};

// Re-export the trait for convenience
pub use crate::core::Sender;
