//! Syslog sender with fallback delivery
//!
//! The sender dials its primary transport at construction. When the dial
//! fails it stays usable: every accepted message goes to the fallback logger
//! (stdout by default) together with a note that primary delivery failed.
//! A failed write while connected reports that one message to the fallback
//! and leaves the sender connected; the transport redials on its next use.
//! [`SyslogSender::reset`] forces a fresh dial at any time.
//!
//! # Example
//!
//! ```no_run
//! use rust_log_sender::prelude::*;
//!
//! let sender = SyslogSender::builder("billing")
//!     .endpoint(SyslogEndpoint::Tcp("logs.internal:514".to_string()))
//!     .level(LevelInfo::new(Priority::INFO, Priority::NOTICE))
//!     .build()
//!     .expect("level is valid");
//!
//! sender.send(&StringMessage::new(Priority::ERROR, "invoice run failed"));
//! ```

mod severity;
mod transport;

pub use severity::Severity;
#[cfg(feature = "syslog")]
pub use fasyslog::format::SyslogContext;
#[cfg(feature = "syslog")]
pub use transport::{context_dialer, tagged_context, NetworkTransport};
pub use transport::{endpoint_dialer, Dialer, SyslogEndpoint, SyslogTransport};

use crate::core::{
    Composer, FallbackLogger, LevelInfo, LoggerError, Priority, Result, Sender, SenderBase,
    SenderMetrics, SenderType,
};
use parking_lot::RwLock;
use std::io::{self, Write};
use std::sync::Arc;

/// Observable state of the primary transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailoverState {
    PrimaryActive,
    /// Primary could not be established; fallback carries everything.
    Degraded,
    Closed,
}

enum Link {
    Active(Arc<dyn SyslogTransport>),
    Degraded(String),
    Closed,
}

impl Link {
    fn state(&self) -> FailoverState {
        match self {
            Link::Active(_) => FailoverState::PrimaryActive,
            Link::Degraded(_) => FailoverState::Degraded,
            Link::Closed => FailoverState::Closed,
        }
    }
}

pub struct SyslogSender {
    base: SenderBase,
    transport_name: String,
    dialer: Dialer,
    link: RwLock<Link>,
}

impl SyslogSender {
    pub fn builder(name: impl Into<String>) -> SyslogSenderBuilder {
        SyslogSenderBuilder::new(name)
    }

    pub fn new(name: impl Into<String>, endpoint: SyslogEndpoint, level: LevelInfo) -> Result<Self> {
        Self::builder(name).endpoint(endpoint).level(level).build()
    }

    /// Connect to the local syslog daemon.
    pub fn local(name: impl Into<String>, level: LevelInfo) -> Result<Self> {
        Self::new(name, SyslogEndpoint::Local, level)
    }

    pub fn state(&self) -> FailoverState {
        self.link.read().state()
    }

    pub fn metrics(&self) -> &SenderMetrics {
        self.base.metrics()
    }

    /// Dial a fresh primary transport and swap it in.
    ///
    /// The previous transport is released once in-flight sends holding it
    /// finish. A failed dial leaves the sender degraded. Has no effect on a
    /// closed sender.
    pub fn reset(&self) {
        if self.state() == FailoverState::Closed {
            self.base.fallback().log(&format!(
                "reset ignored: syslog sender {} is closed",
                self.base.name()
            ));
            return;
        }

        let next = match (self.dialer)() {
            Ok(transport) => Link::Active(transport),
            Err(err) => {
                self.base.fallback().log(&format!(
                    "error restarting syslog [{}] for logger: {}",
                    err,
                    self.base.name()
                ));
                Link::Degraded(err.to_string())
            }
        };

        let mut link = self.link.write();
        if let Link::Closed = *link {
            // Closed while we were dialing.
            if let Link::Active(transport) = next {
                let _ = transport.close();
            }
            return;
        }
        *link = next;
    }

    fn deliver(&self, priority: Priority, text: &str) -> Result<()> {
        let transport = match *self.link.read() {
            Link::Active(ref transport) => Arc::clone(transport),
            Link::Degraded(ref reason) => {
                return Err(LoggerError::transport_unavailable(
                    &self.transport_name,
                    reason.clone(),
                    io::Error::new(io::ErrorKind::NotConnected, reason.clone()),
                ))
            }
            Link::Closed => return Err(LoggerError::closed(self.base.name())),
        };

        let severity = Severity::from_priority(priority)?;
        transport.send(severity, text).map_err(|e| {
            LoggerError::transport_unavailable(
                &self.transport_name,
                format!("write failed: {}", e),
                e,
            )
        })?;
        self.base.metrics().record_primary();
        Ok(())
    }
}

impl Sender for SyslogSender {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn sender_type(&self) -> SenderType {
        SenderType::Syslog
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

        if let Err(err) = self.deliver(priority, text) {
            self.base.report_failure("syslog", &err, priority, text);
        }
    }

    /// Moves to `Closed` and returns the primary transport's close error, if
    /// any. Closing a degraded or already closed sender succeeds.
    fn close(&self) -> Result<()> {
        let previous = std::mem::replace(&mut *self.link.write(), Link::Closed);
        match previous {
            Link::Active(transport) => Ok(transport.close()?),
            Link::Degraded(_) | Link::Closed => Ok(()),
        }
    }
}

/// Builder for [`SyslogSender`]
///
/// Defaults: local endpoint, `Info` default and threshold, stdout fallback,
/// lines tagged with the sender name.
pub struct SyslogSenderBuilder {
    name: String,
    level: LevelInfo,
    endpoint: SyslogEndpoint,
    #[cfg(feature = "syslog")]
    context: Option<SyslogContext>,
    dialer: Option<Dialer>,
    fallback: Option<Box<dyn Write + Send>>,
}

impl SyslogSenderBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LevelInfo::uniform(Priority::INFO),
            endpoint: SyslogEndpoint::Local,
            #[cfg(feature = "syslog")]
            context: None,
            dialer: None,
            fallback: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LevelInfo) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn endpoint(mut self, endpoint: SyslogEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Format lines with `context` instead of the name-tagged default.
    #[cfg(feature = "syslog")]
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: SyslogContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Replace the endpoint's dialer with a custom transport factory.
    #[must_use = "builder methods return a new value"]
    pub fn dialer<F>(mut self, dialer: F) -> Self
    where
        F: Fn() -> io::Result<Arc<dyn SyslogTransport>> + Send + Sync + 'static,
    {
        self.dialer = Some(Box::new(dialer));
        self
    }

    /// Write fallback lines to `writer` instead of stdout.
    #[must_use = "builder methods return a new value"]
    pub fn fallback_writer(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.fallback = Some(writer);
        self
    }

    /// Validates the level, then dials. A failed dial still returns a
    /// working, degraded sender.
    pub fn build(self) -> Result<SyslogSender> {
        let fallback = match self.fallback {
            Some(writer) => FallbackLogger::with_writer(&self.name, writer),
            None => FallbackLogger::stdout(&self.name),
        };

        let (transport_name, dialer) = match self.dialer {
            Some(dialer) => ("custom".to_string(), dialer),
            None => {
                let transport_name = self.endpoint.to_string();
                #[cfg(feature = "syslog")]
                let dialer = match self.context {
                    Some(context) => context_dialer(self.endpoint, context),
                    None => endpoint_dialer(&self.name, self.endpoint),
                };
                #[cfg(not(feature = "syslog"))]
                let dialer = endpoint_dialer(&self.name, self.endpoint);
                (transport_name, dialer)
            }
        };
        let base = SenderBase::with_fallback(self.name, self.level, fallback)?;

        let sender = SyslogSender {
            base,
            transport_name,
            dialer,
            link: RwLock::new(Link::Degraded("not connected".to_string())),
        };
        sender.reset();
        Ok(sender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::StringMessage;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().clone())
                .unwrap()
                .lines()
                .map(String::from)
                .collect()
        }
    }

    #[derive(Default)]
    struct Recording {
        sent: Mutex<Vec<(Severity, String)>>,
        fail_writes: AtomicBool,
        closed: AtomicBool,
    }

    impl SyslogTransport for Recording {
        fn send(&self, severity: Severity, message: &str) -> io::Result<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "daemon restarted"));
            }
            self.sent.lock().push((severity, message.to_string()));
            Ok(())
        }

        fn close(&self) -> io::Result<()> {
            self.closed.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    fn refused() -> io::Result<Arc<dyn SyslogTransport>> {
        Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"))
    }

    fn connected(transport: Arc<Recording>, buffer: &Buffer) -> SyslogSender {
        SyslogSender::builder("app")
            .level(LevelInfo::new(Priority::INFO, Priority::INFO))
            .dialer(move || Ok(transport.clone() as Arc<dyn SyslogTransport>))
            .fallback_writer(Box::new(buffer.clone()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_invalid_level_is_rejected_before_dialing() {
        let dialed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&dialed);
        let result = SyslogSender::builder("app")
            .level(LevelInfo::new(Priority::INVALID, Priority::INFO))
            .dialer(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                refused()
            })
            .build();

        assert!(matches!(result, Err(LoggerError::InvalidLevelInfo { .. })));
        assert_eq!(dialed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_primary_delivery_maps_severity() {
        let buffer = Buffer::default();
        let transport = Arc::new(Recording::default());
        let sender = connected(transport.clone(), &buffer);

        sender.send(&StringMessage::new(Priority::CRITICAL, "replica lag"));

        assert_eq!(sender.state(), FailoverState::PrimaryActive);
        assert_eq!(
            *transport.sent.lock(),
            vec![(Severity::Critical, "replica lag".to_string())]
        );
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn test_failed_dial_degrades_and_falls_back() {
        let buffer = Buffer::default();
        let sender = SyslogSender::builder("app")
            .level(LevelInfo::uniform(Priority::INFO))
            .dialer(refused)
            .fallback_writer(Box::new(buffer.clone()))
            .build()
            .unwrap();

        assert_eq!(sender.state(), FailoverState::Degraded);
        let startup = buffer.lines();
        assert_eq!(startup.len(), 1);
        assert!(startup[0].contains("error restarting syslog [connection refused] for logger: app"));

        sender.send(&StringMessage::new(Priority::ERROR, "payment declined"));

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("[app] "));
        assert!(lines[1].contains("syslog error"));
        assert!(lines[1].contains("[p=70]: payment declined"));
        assert_eq!(sender.metrics().fallback_delivered(), 1);
    }

    #[test]
    fn test_transient_write_error_keeps_primary_active() {
        let buffer = Buffer::default();
        let transport = Arc::new(Recording::default());
        let sender = connected(transport.clone(), &buffer);

        transport.fail_writes.store(true, Ordering::SeqCst);
        sender.send(&StringMessage::new(Priority::WARNING, "first"));
        assert_eq!(sender.state(), FailoverState::PrimaryActive);

        transport.fail_writes.store(false, Ordering::SeqCst);
        sender.send(&StringMessage::new(Priority::WARNING, "second"));

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("daemon restarted"));
        assert!(lines[0].contains("first"));
        assert_eq!(transport.sent.lock().len(), 1);
        assert_eq!(sender.metrics().primary_delivered(), 1);
    }

    #[test]
    fn test_unmappable_priority_falls_back() {
        let buffer = Buffer::default();
        let transport = Arc::new(Recording::default());
        let sender = connected(transport.clone(), &buffer);

        sender.send(&StringMessage::new(Priority::from_u8(65), "between steps"));

        assert!(transport.sent.lock().is_empty());
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("no corresponding backend severity"));
        assert!(lines[0].contains("between steps"));
        assert_eq!(sender.state(), FailoverState::PrimaryActive);
    }

    #[test]
    fn test_reset_recovers_primary() {
        let buffer = Buffer::default();
        let transport = Arc::new(Recording::default());
        let up = Arc::new(AtomicBool::new(false));

        let (t, flag) = (transport.clone(), up.clone());
        let sender = SyslogSender::builder("app")
            .dialer(move || {
                if flag.load(Ordering::SeqCst) {
                    Ok(t.clone() as Arc<dyn SyslogTransport>)
                } else {
                    refused()
                }
            })
            .fallback_writer(Box::new(buffer.clone()))
            .build()
            .unwrap();
        assert_eq!(sender.state(), FailoverState::Degraded);

        up.store(true, Ordering::SeqCst);
        sender.reset();
        assert_eq!(sender.state(), FailoverState::PrimaryActive);

        sender.send(&StringMessage::new(Priority::INFO, "back online"));
        assert_eq!(transport.sent.lock().len(), 1);
    }

    #[test]
    fn test_close_is_terminal() {
        let buffer = Buffer::default();
        let transport = Arc::new(Recording::default());
        let sender = connected(transport.clone(), &buffer);

        sender.close().unwrap();
        assert!(transport.closed.load(Ordering::SeqCst));
        assert_eq!(sender.state(), FailoverState::Closed);

        sender.reset();
        assert_eq!(sender.state(), FailoverState::Closed);

        sender.send(&StringMessage::new(Priority::ERROR, "too late"));
        assert!(transport.sent.lock().is_empty());
        assert!(buffer.lines().last().unwrap().contains("too late"));

        assert!(sender.close().is_ok());
    }

    #[test]
    fn test_close_returns_transport_error() {
        struct FailingClose;

        impl SyslogTransport for FailingClose {
            fn send(&self, _: Severity, _: &str) -> io::Result<()> {
                Ok(())
            }

            fn close(&self) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::Other, "flush failed"))
            }
        }

        let sender = SyslogSender::builder("app")
            .dialer(|| Ok(Arc::new(FailingClose) as Arc<dyn SyslogTransport>))
            .fallback_writer(Box::new(io::sink()))
            .build()
            .unwrap();

        match sender.close() {
            Err(LoggerError::IoError(e)) => assert_eq!(e.to_string(), "flush failed"),
            other => panic!("unexpected close result: {:?}", other.map(|_| ())),
        }
    }

    #[cfg(feature = "syslog")]
    fn received_over_tcp(builder: SyslogSenderBuilder, text: &str) -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = SyslogEndpoint::Tcp(listener.local_addr().unwrap().to_string());

        let sender = builder
            .endpoint(endpoint)
            .fallback_writer(Box::new(io::sink()))
            .build()
            .unwrap();
        let (mut stream, _) = listener.accept().unwrap();
        assert_eq!(sender.state(), FailoverState::PrimaryActive);

        sender.send(&StringMessage::new(Priority::NOTICE, text));
        sender.close().unwrap();

        let mut received = String::new();
        io::Read::read_to_string(&mut stream, &mut received).unwrap();
        received
    }

    #[cfg(feature = "syslog")]
    #[test]
    fn test_lines_are_tagged_with_sender_name() {
        let received = received_over_tcp(SyslogSender::builder("ledger"), "batch settled");
        assert!(received.contains("ledger"));
        assert!(received.contains("batch settled"));
    }

    #[cfg(feature = "syslog")]
    #[test]
    fn test_context_overrides_tag() {
        let mut context = SyslogContext::default();
        context.appname("reconciler");

        let received = received_over_tcp(
            SyslogSender::builder("ledger").context(context),
            "drift detected",
        );
        assert!(received.contains("reconciler"));
        assert!(received.contains("drift detected"));
    }

    #[test]
    fn test_filtered_message_touches_nothing() {
        let buffer = Buffer::default();
        let transport = Arc::new(Recording::default());
        let sender = connected(transport.clone(), &buffer);
        sender
            .set_level(LevelInfo::new(Priority::INFO, Priority::WARNING))
            .unwrap();

        sender.send(&StringMessage::unprioritized("defaults to info"));

        assert!(transport.sent.lock().is_empty());
        assert!(buffer.lines().is_empty());
        assert_eq!(sender.metrics().filtered(), 1);
    }
}
