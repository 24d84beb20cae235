//! No-op sender used before real logging is configured

use crate::core::{Composer, LevelInfo, Result, Sender, SenderBase, SenderType};

/// Accepts every message and writes nothing.
pub struct BootstrapSender {
    base: SenderBase,
}

impl BootstrapSender {
    pub fn new(name: impl Into<String>, level: LevelInfo) -> Result<Self> {
        Ok(Self {
            base: SenderBase::new(name, level)?,
        })
    }
}

impl Sender for BootstrapSender {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn sender_type(&self) -> SenderType {
        SenderType::Bootstrap
    }

    fn level(&self) -> LevelInfo {
        self.base.level()
    }

    fn set_level(&self, level: LevelInfo) -> Result<()> {
        self.base.set_level(level)
    }

    fn send(&self, message: &dyn Composer) {
        let _ = self.base.should_log(message);
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }
}
