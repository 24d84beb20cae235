//! Sender that hands rendered messages to a closure

use crate::core::{
    Composer, LevelInfo, Priority, Result, Sender, SenderBase, SenderMetrics, SenderType,
};

type Callback = Box<dyn Fn(Priority, &str) -> Result<()> + Send + Sync>;

/// A custom backend as a closure.
///
/// # Example
///
/// ```
/// use rust_log_sender::prelude::*;
///
/// let sender = CallbackSender::new("hook", LevelInfo::uniform(Priority::INFO), |priority, text| {
///     assert_eq!(priority, Priority::ERROR);
///     assert_eq!(text, "boom");
///     Ok(())
/// })
/// .unwrap();
///
/// sender.send(&StringMessage::new(Priority::ERROR, "boom"));
/// ```
pub struct CallbackSender {
    base: SenderBase,
    callback: Callback,
}

impl CallbackSender {
    pub fn new<F>(name: impl Into<String>, level: LevelInfo, callback: F) -> Result<Self>
    where
        F: Fn(Priority, &str) -> Result<()> + Send + Sync + 'static,
    {
        Ok(Self {
            base: SenderBase::new(name, level)?,
            callback: Box::new(callback),
        })
    }

    pub fn metrics(&self) -> &SenderMetrics {
        self.base.metrics()
    }
}

impl Sender for CallbackSender {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn sender_type(&self) -> SenderType {
        SenderType::Custom
    }

    fn level(&self) -> LevelInfo {
        self.base.level()
    }

    fn set_level(&self, level: LevelInfo) -> Result<()> {
        self.base.set_level(level)
    }

    fn send(&self, message: &dyn Composer) {
        let Some(priority) = self.base.should_log(message) else {
            return;
        };
        let text = message.render();

        match (self.callback)(priority, text) {
            Ok(()) => {
                self.base.metrics().record_primary();
            }
            Err(e) => self.base.report_failure("callback", &e, priority, text),
        }
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }
}
