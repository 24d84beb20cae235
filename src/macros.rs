//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use rust_log_sender::prelude::*;
//! use rust_log_sender::info;
//!
//! let logger = Logger::builder().name("server").build().unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit priority.
///
/// # Examples
///
/// ```
/// # use rust_log_sender::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_log_sender::log;
/// log!(logger, Priority::INFO, "Simple message");
/// log!(logger, Priority::ERROR, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $priority:expr, $($arg:tt)+) => {
        $logger.log($priority, format!($($arg)+))
    };
}

#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::EMERGENCY, $($arg)+)
    };
}

#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::ALERT, $($arg)+)
    };
}

#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::CRITICAL, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::ERROR, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::WARNING, $($arg)+)
    };
}

#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::NOTICE, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_sender::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_log_sender::info;
/// info!(logger, "Items: {}", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::INFO, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Priority::DEBUG, $($arg)+)
    };
}

/// Build a [`LazyMessage`](crate::message::LazyMessage) whose text is
/// formatted only when a sender renders it.
///
/// Arguments are moved into the message, so they must be owned and
/// `Send + Sync + 'static`. An empty format string yields a message that is
/// never loggable.
///
/// # Examples
///
/// ```
/// # use rust_log_sender::prelude::*;
/// use rust_log_sender::format_message;
///
/// let rows = 1_204;
/// let message = format_message!(Priority::NOTICE, "imported {} rows", rows);
///
/// assert!(message.loggable());
/// assert_eq!(message.render(), "imported 1204 rows");
/// ```
#[macro_export]
macro_rules! format_message {
    ($priority:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::message::LazyMessage::formatted(
            $priority,
            $fmt,
            move || format!($fmt $(, $arg)*),
        )
    };
}
