//! Logger façade over a swappable sender

use super::{
    composer::Composer,
    error::Result,
    level_info::LevelInfo,
    log_context::LogContext,
    priority::Priority,
    sender::Sender,
};
use crate::message::{FieldsMessage, LineMessage, StringMessage};
use crate::senders::NativeSender;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Front end for application code.
///
/// Builds messages, hands them to the current sender and lets the sender be
/// replaced at runtime. Sends in flight keep the sender they started with.
pub struct Logger {
    sender: RwLock<Arc<dyn Sender>>,
}

impl Logger {
    pub fn new<S: Sender + 'static>(sender: S) -> Self {
        Self::from_arc(Arc::new(sender))
    }

    pub fn from_arc(sender: Arc<dyn Sender>) -> Self {
        Self {
            sender: RwLock::new(sender),
        }
    }

    /// Current sender.
    pub fn sender(&self) -> Arc<dyn Sender> {
        Arc::clone(&self.sender.read())
    }

    /// Install a new sender and return the previous one. The previous sender
    /// is not closed.
    pub fn set_sender(&self, sender: Arc<dyn Sender>) -> Arc<dyn Sender> {
        std::mem::replace(&mut *self.sender.write(), sender)
    }

    pub fn name(&self) -> String {
        self.sender().name().to_string()
    }

    pub fn level(&self) -> LevelInfo {
        self.sender().level()
    }

    pub fn set_level(&self, level: LevelInfo) -> Result<()> {
        self.sender().set_level(level)
    }

    pub fn send(&self, message: &dyn Composer) {
        self.sender().send(message);
    }

    pub fn log(&self, priority: Priority, message: impl Into<String>) {
        self.send(&StringMessage::new(priority, message));
    }

    /// Log values joined by spaces.
    pub fn log_line<I, T>(&self, priority: Priority, args: I)
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display + Send + Sync + 'static,
    {
        self.send(&LineMessage::new(priority, args));
    }

    pub fn log_fields(&self, priority: Priority, message: impl Into<String>, fields: LogContext) {
        self.send(&FieldsMessage::new(priority, message, fields));
    }

    #[inline]
    pub fn emergency(&self, message: impl Into<String>) {
        self.log(Priority::EMERGENCY, message);
    }

    #[inline]
    pub fn alert(&self, message: impl Into<String>) {
        self.log(Priority::ALERT, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(Priority::CRITICAL, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Priority::ERROR, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Priority::WARNING, message);
    }

    #[inline]
    pub fn notice(&self, message: impl Into<String>) {
        self.log(Priority::NOTICE, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Priority::INFO, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Priority::DEBUG, message);
    }

    pub fn flush(&self) -> Result<()> {
        self.sender().flush()
    }

    pub fn close(&self) -> Result<()> {
        self.sender().close()
    }

    /// Create a new logger builder
    ///
    /// # Example
    ///
    /// ```
    /// use rust_log_sender::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .name("worker")
    ///     .level(LevelInfo::new(Priority::INFO, Priority::WARNING))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(logger.name(), "worker");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sender = self.sender();
        f.debug_struct("Logger")
            .field("name", &sender.name())
            .field("sender_type", &sender.sender_type())
            .field("level", &sender.level())
            .finish()
    }
}

/// Builder for [`Logger`]
///
/// Without an explicit sender the logger writes to the console through a
/// [`NativeSender`].
pub struct LoggerBuilder {
    name: String,
    level: Option<LevelInfo>,
    sender: Option<Arc<dyn Sender>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            name: "default".to_string(),
            level: None,
            sender: None,
        }
    }

    /// Name of the console sender. Ignored when a sender is supplied.
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Level applied to the sender at build time.
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LevelInfo) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sender<S: Sender + 'static>(mut self, sender: S) -> Self {
        self.sender = Some(Arc::new(sender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_sender(mut self, sender: Arc<dyn Sender>) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn build(self) -> Result<Logger> {
        let sender = match self.sender {
            Some(sender) => {
                if let Some(level) = self.level {
                    sender.set_level(level)?;
                }
                sender
            }
            None => {
                let level = self.level.unwrap_or(LevelInfo::uniform(Priority::INFO));
                Arc::new(NativeSender::new(self.name, level)?) as Arc<dyn Sender>
            }
        };
        Ok(Logger::from_arc(sender))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
