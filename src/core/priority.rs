//! Priority definitions
//!
//! Priorities live on a fixed ordered scale where a larger value is more
//! severe. `Priority::INVALID` (zero) is the unset sentinel and never passes a
//! threshold. Values in `1..=100` are valid; only the eight named steps have a
//! syslog severity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    pub const INVALID: Priority = Priority(0);
    pub const DEBUG: Priority = Priority(30);
    pub const INFO: Priority = Priority(40);
    pub const NOTICE: Priority = Priority(50);
    pub const WARNING: Priority = Priority(60);
    pub const ERROR: Priority = Priority(70);
    pub const CRITICAL: Priority = Priority(80);
    pub const ALERT: Priority = Priority(90);
    pub const EMERGENCY: Priority = Priority(100);

    /// The named steps, most severe first.
    pub const NAMED: [Priority; 8] = [
        Priority::EMERGENCY,
        Priority::ALERT,
        Priority::CRITICAL,
        Priority::ERROR,
        Priority::WARNING,
        Priority::NOTICE,
        Priority::INFO,
        Priority::DEBUG,
    ];

    /// Wrap a raw value without validating it.
    pub const fn from_u8(value: u8) -> Self {
        Priority(value)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 > Priority::INVALID.0 && self.0 <= Priority::EMERGENCY.0
    }

    /// Name of a named step, `None` for every other value.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Priority::EMERGENCY => "emergency",
            Priority::ALERT => "alert",
            Priority::CRITICAL => "critical",
            Priority::ERROR => "error",
            Priority::WARNING => "warning",
            Priority::NOTICE => "notice",
            Priority::INFO => "info",
            Priority::DEBUG => "debug",
            Priority::INVALID => "invalid",
            _ => return None,
        };
        Some(name)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match *self {
            p if p >= Priority::CRITICAL => BrightRed,
            p if p >= Priority::ERROR => Red,
            p if p >= Priority::WARNING => Yellow,
            p if p >= Priority::NOTICE => Cyan,
            p if p >= Priority::INFO => Green,
            p if p >= Priority::DEBUG => Blue,
            _ => BrightBlack,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.trim().to_lowercase().as_str() {
            "emergency" | "emerg" => Priority::EMERGENCY,
            "alert" => Priority::ALERT,
            "critical" | "crit" => Priority::CRITICAL,
            "error" | "err" => Priority::ERROR,
            "warning" | "warn" => Priority::WARNING,
            "notice" => Priority::NOTICE,
            "info" => Priority::INFO,
            "debug" => Priority::DEBUG,
            other => match other.parse::<u8>() {
                Ok(value) if Priority(value).is_valid() => Priority(value),
                _ => return Err(format!("Invalid priority: '{}'", s)),
            },
        };
        Ok(parsed)
    }
}
