//! Shared test doubles: an in-memory writer and a recording syslog transport

#![allow(dead_code)]

use parking_lot::Mutex;
use rust_log_sender::{Severity, SyslogTransport};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Cloneable writer whose clones share one buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn boxed(&self) -> Box<dyn Write + Send> {
        Box::new(self.clone())
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Syslog transport that keeps what it receives and can be told to fail.
#[derive(Default)]
pub struct RecordingTransport {
    pub sent: Mutex<Vec<(Severity, String)>>,
    pub fail_writes: AtomicBool,
    pub closed: AtomicBool,
}

impl RecordingTransport {
    pub fn count(&self) -> usize {
        self.sent.lock().len()
    }
}

impl SyslogTransport for RecordingTransport {
    fn send(&self, severity: Severity, message: &str) -> io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        }
        self.sent.lock().push((severity, message.to_string()));
        Ok(())
    }

    fn close(&self) -> io::Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Dialer state: every successful dial hands out the same transport.
pub struct Switchboard {
    pub transport: Arc<RecordingTransport>,
    pub up: AtomicBool,
    pub dials: AtomicUsize,
}

impl Switchboard {
    pub fn new(up: bool) -> Arc<Self> {
        Arc::new(Self {
            transport: Arc::new(RecordingTransport::default()),
            up: AtomicBool::new(up),
            dials: AtomicUsize::new(0),
        })
    }

    pub fn dial(&self) -> io::Result<Arc<dyn SyslogTransport>> {
        self.dials.fetch_add(1, Ordering::SeqCst);
        if self.up.load(Ordering::SeqCst) {
            Ok(self.transport.clone() as Arc<dyn SyslogTransport>)
        } else {
            Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))
        }
    }
}
