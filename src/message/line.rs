//! Line-style message built from a sequence of displayable values
//!
//! Values are joined with single spaces when first rendered, and leading or
//! trailing spaces and newlines are trimmed from the result.

use crate::core::{Base, Composer, Priority, Result};
use std::fmt;

type Arg = Box<dyn fmt::Display + Send + Sync>;

pub struct LineMessage {
    base: Base,
    lines: Vec<Arg>,
}

impl LineMessage {
    pub fn new<I, T>(priority: Priority, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display + Send + Sync + 'static,
    {
        Self {
            base: Base::new(priority),
            lines: args.into_iter().map(|a| Box::new(a) as Arg).collect(),
        }
    }

    /// A message without a priority; the sender's default level applies.
    pub fn unprioritized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display + Send + Sync + 'static,
    {
        Self::new(Priority::INVALID, args)
    }

    /// Start an empty line and add values of mixed types with [`arg`](Self::arg).
    pub fn empty(priority: Priority) -> Self {
        Self {
            base: Base::new(priority),
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, value: impl fmt::Display + Send + Sync + 'static) -> Self {
        self.push(value);
        self
    }

    /// Append a value. Has no effect on an already rendered message.
    pub fn push(&mut self, value: impl fmt::Display + Send + Sync + 'static) {
        self.lines.push(Box::new(value));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn join(&self) -> String {
        let joined = self
            .lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        joined.trim_matches(|c| c == '\n' || c == ' ').to_string()
    }
}

impl Composer for LineMessage {
    fn loggable(&self) -> bool {
        !self.lines.is_empty()
    }

    fn priority(&self) -> Priority {
        self.base.priority()
    }

    fn set_priority(&mut self, priority: Priority) -> Result<()> {
        self.base.set_priority(priority)
    }

    fn render(&self) -> &str {
        self.base.render_with(|| self.join())
    }

    fn raw(&self) -> serde_json::Value {
        let lines: Vec<String> = self.lines.iter().map(|l| l.to_string()).collect();
        self.base.attach_metadata(serde_json::json!({ "lines": lines }))
    }
}

impl fmt::Display for LineMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

impl fmt::Debug for LineMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineMessage")
            .field("priority", &self.base.priority())
            .field("lines", &self.lines.len())
            .field("rendered", &self.base.is_rendered())
            .finish()
    }
}
