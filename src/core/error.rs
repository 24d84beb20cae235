//! Error types for the logging dispatch core

use super::priority::Priority;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Priority outside the valid ordered scale
    #[error("Invalid priority: {value} is outside the valid range 1..=100")]
    InvalidPriority { value: u8 },

    /// Default or threshold unset or invalid
    #[error("Invalid level info: default={default}, threshold={threshold}")]
    InvalidLevelInfo {
        default: Priority,
        threshold: Priority,
    },

    /// Priority has no corresponding backend severity
    #[error("Priority {priority} has no corresponding backend severity")]
    UnmappablePriority { priority: Priority },

    /// Primary transport could not be established or a write failed
    #[error("Transport '{transport}' unavailable: {message}")]
    TransportUnavailable {
        transport: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Sender was closed before the call
    #[error("Sender '{name}' is closed")]
    SenderClosed { name: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a transport unavailable error with context
    pub fn transport_unavailable(
        transport: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::TransportUnavailable {
            transport: transport.into(),
            message: message.into(),
            source,
        }
    }

    pub fn invalid_priority(priority: Priority) -> Self {
        LoggerError::InvalidPriority {
            value: priority.as_u8(),
        }
    }

    pub fn unmappable(priority: Priority) -> Self {
        LoggerError::UnmappablePriority { priority }
    }

    pub fn closed(name: impl Into<String>) -> Self {
        LoggerError::SenderClosed { name: name.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
