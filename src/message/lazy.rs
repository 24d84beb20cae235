//! Message whose text is produced by a closure on first render
//!
//! Backs the [`format_message!`](crate::format_message) macro: formatting
//! work is skipped entirely for messages the level gate rejects.

use crate::core::{Base, Composer, Priority, Result};
use std::fmt;

type Producer = Box<dyn Fn() -> String + Send + Sync>;

pub struct LazyMessage {
    base: Base,
    loggable: bool,
    producer: Producer,
}

impl LazyMessage {
    pub fn new<F>(priority: Priority, producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            base: Base::new(priority),
            loggable: true,
            producer: Box::new(producer),
        }
    }

    /// Loggable only when `template` is non-empty, so an empty format string
    /// is rejected without running the producer.
    pub fn formatted<F>(priority: Priority, template: &str, producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        let mut message = Self::new(priority, producer);
        message.loggable = !template.is_empty();
        message
    }
}

impl Composer for LazyMessage {
    fn loggable(&self) -> bool {
        self.loggable
    }

    fn priority(&self) -> Priority {
        self.base.priority()
    }

    fn set_priority(&mut self, priority: Priority) -> Result<()> {
        self.base.set_priority(priority)
    }

    fn render(&self) -> &str {
        self.base.render_with(|| (self.producer)())
    }

    /// Carries the text only once something has rendered it.
    fn raw(&self) -> serde_json::Value {
        let raw = match self.base.cached() {
            Some(message) => serde_json::json!({ "message": message }),
            None => serde_json::json!({}),
        };
        self.base.attach_metadata(raw)
    }
}

impl fmt::Display for LazyMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

impl fmt::Debug for LazyMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyMessage")
            .field("priority", &self.base.priority())
            .field("loggable", &self.loggable)
            .field("rendered", &self.base.is_rendered())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_producer_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let message = LazyMessage::new(Priority::INFO, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "expensive".to_string()
        });

        assert!(message.loggable());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(message.render(), "expensive");
        assert_eq!(message.render(), "expensive");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_raw_leaves_render_cache_alone() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let message = LazyMessage::new(Priority::WARNING, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "quota exceeded".to_string()
        });

        let before = message.raw();
        assert!(before.get("message").is_none());
        assert_eq!(before["metadata"]["priority"], 60);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        message.render();
        assert_eq!(message.raw()["message"], "quota exceeded");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_template_not_loggable() {
        let message = LazyMessage::formatted(Priority::INFO, "", String::new);
        assert!(!message.loggable());
    }
}
