//! Fan-out sender
//!
//! Forwards every message to each child sender. Children apply their own
//! level gate, so one message may reach some children and not others.

use crate::core::{Composer, LevelInfo, LoggerError, Result, Sender, SenderBase, SenderType};
use parking_lot::RwLock;
use std::sync::Arc;

pub struct MultiSender {
    base: SenderBase,
    senders: RwLock<Vec<Arc<dyn Sender>>>,
}

impl MultiSender {
    /// Every child receives `level`.
    pub fn new(
        name: impl Into<String>,
        level: LevelInfo,
        senders: Vec<Arc<dyn Sender>>,
    ) -> Result<Self> {
        let base = SenderBase::new(name, level)?;
        for sender in &senders {
            sender.set_level(level)?;
        }
        Ok(Self {
            base,
            senders: RwLock::new(senders),
        })
    }

    /// Add a child; it keeps its own level.
    pub fn add(&self, sender: Arc<dyn Sender>) {
        self.senders.write().push(sender);
    }

    pub fn len(&self) -> usize {
        self.senders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.read().is_empty()
    }
}

impl Sender for MultiSender {
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
        self.base.set_level(level)?;
        for sender in self.senders.read().iter() {
            sender.set_level(level)?;
        }
        Ok(())
    }

    fn send(&self, message: &dyn Composer) {
        if !message.loggable() {
            return;
        }
        for sender in self.senders.read().iter() {
            sender.send(message);
        }
    }

    fn flush(&self) -> Result<()> {
        for sender in self.senders.read().iter() {
            sender.flush()?;
        }
        Ok(())
    }

    /// Closes every child; returns the first error after trying them all.
    fn close(&self) -> Result<()> {
        let mut first: Option<LoggerError> = None;
        for sender in self.senders.read().iter() {
            if let Err(e) = sender.close() {
                first.get_or_insert(e);
            }
        }
        first.map_or(Ok(()), Err)
    }
}
