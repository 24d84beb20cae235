//! Composer trait for lazily rendered, priority-tagged messages
//!
//! A composer owns a payload and a priority. Senders ask it whether it is
//! worth logging at all, and only render it once emission is certain. The
//! rendered form is computed once and cached: every later call returns the
//! same string even if the payload changed in between.

use super::error::{LoggerError, Result};
use super::priority::Priority;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::OnceLock;

pub trait Composer: Send + Sync {
    /// Whether the payload has renderable content. Never renders.
    fn loggable(&self) -> bool;

    fn priority(&self) -> Priority;

    /// Fails with [`LoggerError::InvalidPriority`] and keeps the old value
    /// when `priority` is outside the valid range.
    fn set_priority(&mut self, priority: Priority) -> Result<()>;

    /// Rendered form of the payload, computed on first call and cached.
    fn render(&self) -> &str;

    /// Structured form of the payload for structured sinks.
    ///
    /// Collects message metadata but does not fill the render cache.
    fn raw(&self) -> serde_json::Value;
}

/// Process and time information attached to a message on first collection.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub pid: u32,
    pub time: DateTime<Utc>,
    pub priority: Priority,
}

/// State shared by every message kind: priority, render cache and metadata.
#[derive(Debug, Default)]
pub struct Base {
    priority: Priority,
    rendered: OnceLock<String>,
    metadata: OnceLock<Metadata>,
}

impl Base {
    /// Invalid priorities are ignored and leave the message unset, so the
    /// sender's default level applies to it.
    pub fn new(priority: Priority) -> Self {
        let mut base = Self::default();
        let _ = base.set_priority(priority);
        base
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn set_priority(&mut self, priority: Priority) -> Result<()> {
        if !priority.is_valid() {
            return Err(LoggerError::invalid_priority(priority));
        }
        self.priority = priority;
        Ok(())
    }

    /// Return the cached render, running `render` only if nothing is cached.
    pub fn render_with<F>(&self, render: F) -> &str
    where
        F: FnOnce() -> String,
    {
        self.rendered.get_or_init(render)
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered.get().is_some()
    }

    /// The cached render, without producing one.
    pub fn cached(&self) -> Option<&str> {
        self.rendered.get().map(String::as_str)
    }

    /// Capture metadata once; later calls return the first capture, so the
    /// priority here is the one at first collection.
    pub fn collect(&self) -> &Metadata {
        self.metadata.get_or_init(|| Metadata {
            pid: std::process::id(),
            time: Utc::now(),
            priority: self.priority,
        })
    }

    /// Insert the collected metadata under `"metadata"` in a raw payload,
    /// carrying the current priority.
    pub(crate) fn attach_metadata(&self, mut raw: serde_json::Value) -> serde_json::Value {
        if let serde_json::Value::Object(ref mut map) = raw {
            let metadata = Metadata {
                priority: self.priority,
                ..self.collect().clone()
            };
            let metadata = serde_json::to_value(metadata).unwrap_or(serde_json::Value::Null);
            map.insert("metadata".to_string(), metadata);
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_base_rejects_invalid_priority() {
        let mut base = Base::new(Priority::ERROR);
        let err = base.set_priority(Priority::from_u8(150)).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidPriority { value: 150 }));
        assert_eq!(base.priority(), Priority::ERROR);
    }

    #[test]
    fn test_base_new_ignores_invalid_priority() {
        let base = Base::new(Priority::INVALID);
        assert_eq!(base.priority(), Priority::INVALID);
    }

    #[test]
    fn test_render_runs_once() {
        let base = Base::new(Priority::INFO);
        let calls = AtomicUsize::new(0);

        assert!(!base.is_rendered());
        let first = base
            .render_with(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                "first".to_string()
            })
            .to_string();
        let second = base.render_with(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            "second".to_string()
        });

        assert_eq!(first, "first");
        assert_eq!(second, "first");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_render() {
        let base = Arc::new(Base::new(Priority::INFO));
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let base = Arc::clone(&base);
                let calls = Arc::clone(&calls);
                std::thread::spawn(move || {
                    base.render_with(|| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        format!("thread {}", i)
                    })
                    .to_string()
                })
            })
            .collect();

        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_attached_metadata_follows_priority() {
        let mut base = Base::new(Priority::INFO);
        let first = base.attach_metadata(serde_json::json!({}));
        assert_eq!(first["metadata"]["priority"], 40);

        base.set_priority(Priority::CRITICAL).unwrap();
        let second = base.attach_metadata(serde_json::json!({}));
        assert_eq!(second["metadata"]["priority"], 80);
        assert_eq!(second["metadata"]["time"], first["metadata"]["time"]);
    }

    #[test]
    fn test_cached_does_not_render() {
        let base = Base::new(Priority::INFO);
        assert_eq!(base.cached(), None);
        base.render_with(|| "done".to_string());
        assert_eq!(base.cached(), Some("done"));
    }

    #[test]
    fn test_collect_is_idempotent() {
        let base = Base::new(Priority::WARNING);
        let first = base.collect().time;
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert_eq!(base.collect().time, first);
        assert_eq!(base.collect().priority, Priority::WARNING);
        assert_eq!(base.collect().pid, std::process::id());
    }
}
