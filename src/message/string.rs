//! Single-value message

use crate::core::{Base, Composer, Priority, Result};
use std::fmt;

/// A message holding one already-built string. Loggable when non-empty.
#[derive(Debug)]
pub struct StringMessage {
    base: Base,
    message: String,
}

impl StringMessage {
    pub fn new(priority: Priority, message: impl Into<String>) -> Self {
        Self {
            base: Base::new(priority),
            message: message.into(),
        }
    }

    /// A message without a priority; the sender's default level applies.
    pub fn unprioritized(message: impl Into<String>) -> Self {
        Self::new(Priority::INVALID, message)
    }
}

impl Composer for StringMessage {
    fn loggable(&self) -> bool {
        !self.message.is_empty()
    }

    fn priority(&self) -> Priority {
        self.base.priority()
    }

    fn set_priority(&mut self, priority: Priority) -> Result<()> {
        self.base.set_priority(priority)
    }

    fn render(&self) -> &str {
        self.base.render_with(|| self.message.clone())
    }

    fn raw(&self) -> serde_json::Value {
        self.base
            .attach_metadata(serde_json::json!({ "message": self.message }))
    }
}

impl fmt::Display for StringMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}
