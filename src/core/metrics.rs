//! Sender delivery metrics
//!
//! Counters for how messages left a sender: through the primary transport,
//! through the fallback, or not at all because the level gate filtered them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Delivery counters for a single sender
///
/// # Example
///
/// ```
/// use rust_log_sender::SenderMetrics;
///
/// let metrics = SenderMetrics::new();
///
/// metrics.record_primary();
/// metrics.record_fallback();
///
/// assert_eq!(metrics.primary_delivered(), 1);
/// assert_eq!(metrics.total_delivered(), 2);
/// ```
#[derive(Debug)]
pub struct SenderMetrics {
    /// Messages written by the primary transport
    primary_delivered: AtomicU64,

    /// Messages written to the fallback transport
    fallback_delivered: AtomicU64,

    /// Messages rejected by the level gate
    filtered: AtomicU64,

    /// Primary transport failures, including unmappable priorities
    send_errors: AtomicU64,
}

impl SenderMetrics {
    pub const fn new() -> Self {
        Self {
            primary_delivered: AtomicU64::new(0),
            fallback_delivered: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            send_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn primary_delivered(&self) -> u64 {
        self.primary_delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn fallback_delivered(&self) -> u64 {
        self.fallback_delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn send_errors(&self) -> u64 {
        self.send_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn total_delivered(&self) -> u64 {
        self.primary_delivered() + self.fallback_delivered()
    }

    #[inline]
    pub fn record_primary(&self) -> u64 {
        self.primary_delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_fallback(&self) -> u64 {
        self.fallback_delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_send_error(&self) -> u64 {
        self.send_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of delivered messages that went through the fallback (0.0 - 100.0)
    pub fn fallback_rate(&self) -> f64 {
        let fallback = self.fallback_delivered() as f64;
        let total = self.total_delivered() as f64;
        if total == 0.0 {
            0.0
        } else {
            (fallback / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.primary_delivered.store(0, Ordering::Relaxed);
        self.fallback_delivered.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.send_errors.store(0, Ordering::Relaxed);
    }
}

impl Default for SenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SenderMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            primary_delivered: AtomicU64::new(self.primary_delivered()),
            fallback_delivered: AtomicU64::new(self.fallback_delivered()),
            filtered: AtomicU64::new(self.filtered()),
            send_errors: AtomicU64::new(self.send_errors()),
        }
    }
}
