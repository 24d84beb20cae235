//! Core logger types and traits

pub mod composer;
pub mod error;
pub mod fallback;
pub mod level_info;
pub mod log_context;
pub mod logger;
pub mod metrics;
pub mod priority;
pub mod sender;
pub mod sender_type;

pub use composer::{Base, Composer, Metadata};
pub use error::{LoggerError, Result};
pub use fallback::FallbackLogger;
pub use level_info::{should_log, LevelInfo};
pub use log_context::{FieldValue, LogContext};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::SenderMetrics;
pub use priority::Priority;
pub use sender::{Sender, SenderBase};
pub use sender_type::SenderType;
