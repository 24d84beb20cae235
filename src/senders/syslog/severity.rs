//! Syslog severities and the priority mapping table

use crate::core::{LoggerError, Priority, Result};
use std::fmt;

/// RFC 5424 severity levels, numerically ordered from most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Informational = 6,
    Debug = 7,
}

impl Severity {
    /// Only the eight named priorities map; anything else, including valid
    /// priorities between the named steps, is `UnmappablePriority`.
    pub fn from_priority(priority: Priority) -> Result<Self> {
        let severity = match priority {
            Priority::EMERGENCY => Severity::Emergency,
            Priority::ALERT => Severity::Alert,
            Priority::CRITICAL => Severity::Critical,
            Priority::ERROR => Severity::Error,
            Priority::WARNING => Severity::Warning,
            Priority::NOTICE => Severity::Notice,
            Priority::INFO => Severity::Informational,
            Priority::DEBUG => Severity::Debug,
            other => return Err(LoggerError::unmappable(other)),
        };
        Ok(severity)
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Emergency => "emerg",
            Severity::Alert => "alert",
            Severity::Critical => "crit",
            Severity::Error => "err",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Informational => "info",
            Severity::Debug => "debug",
        };
        f.write_str(name)
    }
}

#[cfg(feature = "syslog")]
impl From<Severity> for fasyslog::Severity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Emergency => fasyslog::Severity::EMERGENCY,
            Severity::Alert => fasyslog::Severity::ALERT,
            Severity::Critical => fasyslog::Severity::CRITICAL,
            Severity::Error => fasyslog::Severity::ERROR,
            Severity::Warning => fasyslog::Severity::WARNING,
            Severity::Notice => fasyslog::Severity::NOTICE,
            Severity::Informational => fasyslog::Severity::INFORMATIONAL,
            Severity::Debug => fasyslog::Severity::DEBUG,
        }
    }
}
