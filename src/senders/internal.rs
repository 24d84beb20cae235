//! In-process sender backed by a channel
//!
//! Every loggable message is forwarded, whether or not the threshold accepted
//! it, together with a `logged` flag. Only accepted messages are rendered.
//! Empty messages are dropped before they reach the channel.
//! Useful for tests and for in-process consumers of log traffic.

use crate::core::{
    Composer, LevelInfo, Priority, Result, Sender, SenderBase, SenderMetrics, SenderType,
};
use crossbeam_channel::{unbounded, Receiver, Sender as ChannelSender};
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalMessage {
    /// Effective priority the gate used
    pub priority: Priority,
    /// Level snapshot at send time
    pub level: LevelInfo,
    pub logged: bool,
    /// Present only for logged messages
    pub rendered: Option<String>,
}

pub struct InternalSender {
    base: SenderBase,
    tx: Mutex<Option<ChannelSender<InternalMessage>>>,
    rx: Receiver<InternalMessage>,
}

impl InternalSender {
    pub fn new(name: impl Into<String>, level: LevelInfo) -> Result<Self> {
        let (tx, rx) = unbounded();
        Ok(Self {
            base: SenderBase::new(name, level)?,
            tx: Mutex::new(Some(tx)),
            rx,
        })
    }

    pub fn metrics(&self) -> &SenderMetrics {
        self.base.metrics()
    }

    /// Next queued message, if any.
    pub fn get_message(&self) -> Option<InternalMessage> {
        self.rx.try_recv().ok()
    }

    pub fn has_message(&self) -> bool {
        !self.rx.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// A receiver for consuming messages from another thread.
    pub fn receiver(&self) -> Receiver<InternalMessage> {
        self.rx.clone()
    }
}

impl Sender for InternalSender {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn sender_type(&self) -> SenderType {
        SenderType::Internal
    }

    fn level(&self) -> LevelInfo {
        self.base.level()
    }

    fn set_level(&self, level: LevelInfo) -> Result<()> {
        self.base.set_level(level)
    }

    fn send(&self, message: &dyn Composer) {
        if !message.loggable() {
            self.base.metrics().record_filtered();
            return;
        }
        let level = self.base.level();
        let logged = self.base.should_log(message).is_some();
        let entry = InternalMessage {
            priority: level.effective_priority(message),
            level,
            logged,
            rendered: logged.then(|| message.render().to_string()),
        };

        // A closed sender drops messages silently.
        if let Some(ref tx) = *self.tx.lock() {
            if tx.send(entry).is_ok() && logged {
                self.base.metrics().record_primary();
            }
        }
    }

    /// Disconnects the channel; queued messages stay readable.
    fn close(&self) -> Result<()> {
        self.tx.lock().take();
        Ok(())
    }
}
