//! Structured key-value message

use crate::core::{Base, Composer, FieldValue, LogContext, Priority, Result};
use std::fmt;

/// A structured record with an optional human-readable message.
///
/// Renders as `[message='...' key='value' ...]` with the message first and
/// the remaining keys in sorted order.
#[derive(Debug)]
pub struct FieldsMessage {
    base: Base,
    message: Option<String>,
    fields: LogContext,
}

impl FieldsMessage {
    pub fn new(priority: Priority, message: impl Into<String>, fields: LogContext) -> Self {
        let message = message.into();
        Self {
            base: Base::new(priority),
            message: (!message.is_empty()).then_some(message),
            fields,
        }
    }

    pub fn from_fields(priority: Priority, fields: LogContext) -> Self {
        Self {
            base: Base::new(priority),
            message: None,
            fields,
        }
    }

    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.add_field(key, value);
        self
    }

    /// Add a field. Has no effect on an already rendered message.
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.add_field(key, value);
    }

    pub fn fields(&self) -> &LogContext {
        &self.fields
    }

    fn format(&self) -> String {
        let mut out = Vec::with_capacity(self.fields.len() + 1);
        if let Some(ref message) = self.message {
            out.push(format!("message='{}'", message));
        }
        for (key, value) in self.fields.fields() {
            out.push(format!("{}='{}'", key, value));
        }
        format!("[{}]", out.join(" "))
    }
}

impl Composer for FieldsMessage {
    fn loggable(&self) -> bool {
        self.message.is_some() || !self.fields.is_empty()
    }

    fn priority(&self) -> Priority {
        self.base.priority()
    }

    fn set_priority(&mut self, priority: Priority) -> Result<()> {
        self.base.set_priority(priority)
    }

    fn render(&self) -> &str {
        self.base.render_with(|| self.format())
    }

    fn raw(&self) -> serde_json::Value {
        let mut raw = self.fields.to_json_value();
        if let (Some(message), serde_json::Value::Object(map)) = (&self.message, &mut raw) {
            map.insert("message".to_string(), serde_json::Value::String(message.clone()));
        }
        self.base.attach_metadata(raw)
    }
}

impl fmt::Display for FieldsMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_format() {
        let message = FieldsMessage::new(
            Priority::ERROR,
            "upload failed",
            LogContext::new()
                .with_field("status", 503)
                .with_field("bucket", "media"),
        );

        assert_eq!(
            message.render(),
            "[message='upload failed' bucket='media' status='503']"
        );
    }

    #[test]
    fn test_loggable() {
        assert!(!FieldsMessage::from_fields(Priority::INFO, LogContext::new()).loggable());
        assert!(FieldsMessage::new(Priority::INFO, "hello", LogContext::new()).loggable());
        assert!(FieldsMessage::from_fields(Priority::INFO, LogContext::new())
            .with_field("k", "v")
            .loggable());
    }

    #[test]
    fn test_raw_is_structured() {
        let message = FieldsMessage::new(Priority::INFO, "login", LogContext::new())
            .with_field("user_id", 42);
        let raw = message.raw();

        assert_eq!(raw["message"], "login");
        assert_eq!(raw["user_id"], 42);
        assert_eq!(raw["metadata"]["priority"], 40);
    }

    #[test]
    fn test_render_is_memoized_across_mutation() {
        let mut message = FieldsMessage::from_fields(Priority::INFO, LogContext::new())
            .with_field("a", 1);
        let first = message.render().to_string();

        message.add_field("b", 2);
        assert_eq!(message.render(), first);
        assert_eq!(message.fields().len(), 2);
    }
}
