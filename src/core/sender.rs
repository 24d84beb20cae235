//! Sender trait for log output backends

use super::composer::Composer;
use super::error::Result;
use super::fallback::FallbackLogger;
use super::level_info::LevelInfo;
use super::metrics::SenderMetrics;
use super::priority::Priority;
use super::sender_type::SenderType;
use parking_lot::RwLock;

/// A priority-filtered log destination.
///
/// Implementations must run the level-filter gate themselves before doing
/// any work, and must never propagate delivery errors out of [`send`]: a
/// failed delivery is reported through the sender's fallback instead.
///
/// Every method takes `&self` so one sender can be shared between threads.
///
/// [`send`]: Sender::send
pub trait Sender: Send + Sync {
    fn name(&self) -> &str;

    fn sender_type(&self) -> SenderType;

    fn level(&self) -> LevelInfo;

    /// Fails with `InvalidLevelInfo` and keeps the previous level when
    /// either priority is invalid.
    fn set_level(&self, level: LevelInfo) -> Result<()>;

    fn send(&self, message: &dyn Composer);

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// Release transport resources. Must not panic when they are already
    /// released.
    fn close(&self) -> Result<()>;
}

/// Name, level policy, metrics and fallback shared by the bundled senders.
#[derive(Debug)]
pub struct SenderBase {
    name: String,
    level: RwLock<LevelInfo>,
    metrics: SenderMetrics,
    fallback: FallbackLogger,
}

impl SenderBase {
    pub fn new(name: impl Into<String>, level: LevelInfo) -> Result<Self> {
        let name = name.into();
        let fallback = FallbackLogger::stdout(&name);
        Self::with_fallback(name, level, fallback)
    }

    pub fn with_fallback(
        name: impl Into<String>,
        level: LevelInfo,
        fallback: FallbackLogger,
    ) -> Result<Self> {
        level.validate()?;
        Ok(Self {
            name: name.into(),
            level: RwLock::new(level),
            metrics: SenderMetrics::new(),
            fallback,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn level(&self) -> LevelInfo {
        *self.level.read()
    }

    pub fn set_level(&self, level: LevelInfo) -> Result<()> {
        level.validate()?;
        *self.level.write() = level;
        Ok(())
    }

    /// Run the level gate against a snapshot of the current level.
    ///
    /// Returns the effective priority when the message should be emitted.
    pub fn should_log(&self, message: &dyn Composer) -> Option<Priority> {
        let level = self.level();
        if level.should_log(message) {
            Some(level.effective_priority(message))
        } else {
            self.metrics.record_filtered();
            None
        }
    }

    #[inline]
    pub fn metrics(&self) -> &SenderMetrics {
        &self.metrics
    }

    #[inline]
    pub fn fallback(&self) -> &FallbackLogger {
        &self.fallback
    }

    /// Emit a failed delivery on the fallback as one line carrying the
    /// failure, the priority and the original text.
    pub fn report_failure(
        &self,
        kind: &str,
        error: &dyn std::fmt::Display,
        priority: Priority,
        text: &str,
    ) {
        self.metrics.record_send_error();
        self.fallback
            .log(&format!("{} error: {} [p={}]: {}", kind, error, priority.as_u8(), text));
        self.metrics.record_fallback();
    }
}
