//! Per-sender level policy and the level-filter gate

use super::composer::Composer;
use super::error::{LoggerError, Result};
use super::priority::Priority;
use serde::{Deserialize, Serialize};

/// Default and threshold priorities attached to a sender.
///
/// `default` applies to messages that carry no valid priority; `threshold`
/// is the minimum priority a message needs to be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelInfo {
    pub default: Priority,
    pub threshold: Priority,
}

impl LevelInfo {
    pub const fn new(default: Priority, threshold: Priority) -> Self {
        Self { default, threshold }
    }

    /// Same priority for default and threshold.
    pub const fn uniform(priority: Priority) -> Self {
        Self::new(priority, priority)
    }

    pub fn valid(&self) -> bool {
        self.default.is_valid() && self.threshold.is_valid()
    }

    pub fn validate(&self) -> Result<()> {
        if self.valid() {
            Ok(())
        } else {
            Err(LoggerError::InvalidLevelInfo {
                default: self.default,
                threshold: self.threshold,
            })
        }
    }

    /// The composer's own priority when valid, otherwise this default.
    #[inline]
    pub fn effective_priority(&self, message: &dyn Composer) -> Priority {
        let priority = message.priority();
        if priority.is_valid() {
            priority
        } else {
            self.default
        }
    }

    #[inline]
    pub fn should_log(&self, message: &dyn Composer) -> bool {
        should_log(self, message)
    }
}

/// The level-filter gate every sender runs before touching its transport.
///
/// Non-loggable messages never pass, whatever their priority.
pub fn should_log(level: &LevelInfo, message: &dyn Composer) -> bool {
    if !message.loggable() {
        return false;
    }
    level.effective_priority(message) >= level.threshold
}
