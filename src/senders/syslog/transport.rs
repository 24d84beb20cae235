//! Syslog transports
//!
//! [`SyslogTransport`] is the seam between the failover controller and the
//! wire. [`NetworkTransport`] speaks RFC 3164 over TCP, UDP or a Unix socket
//! through `fasyslog`. A broken connection is dropped on the failed write and
//! redialed on the next one, so a restarted daemon is picked up without the
//! caller noticing.

use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

pub trait SyslogTransport: Send + Sync {
    fn send(&self, severity: Severity, message: &str) -> io::Result<()>;

    /// Must tolerate being called more than once.
    fn close(&self) -> io::Result<()>;
}

/// Opens a fresh primary transport. Called at construction and on every
/// reset.
pub type Dialer = Box<dyn Fn() -> io::Result<Arc<dyn SyslogTransport>> + Send + Sync>;

/// Where a syslog sender delivers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "network", content = "address", rename_all = "lowercase")]
pub enum SyslogEndpoint {
    /// The local daemon on its well-known Unix socket
    #[default]
    Local,
    Tcp(String),
    Udp(String),
    Unix(PathBuf),
}

impl fmt::Display for SyslogEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyslogEndpoint::Local => f.write_str("local"),
            SyslogEndpoint::Tcp(addr) => write!(f, "tcp://{}", addr),
            SyslogEndpoint::Udp(addr) => write!(f, "udp://{}", addr),
            SyslogEndpoint::Unix(path) => write!(f, "unix://{}", path.display()),
        }
    }
}

#[cfg(feature = "syslog")]
pub use network::{tagged_context, NetworkTransport};

#[cfg(feature = "syslog")]
mod network {
    use super::*;
    use fasyslog::format::SyslogContext;
    use fasyslog::sender::SyslogSender;
    use std::fmt::Display;
    use parking_lot::Mutex;

    #[cfg(unix)]
    const WELL_KNOWN_SOCKETS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

    pub struct NetworkTransport {
        endpoint: SyslogEndpoint,
        context: SyslogContext,
        state: Mutex<Connection>,
    }

    /// `sender` is `None` after a failed write until the next redial.
    struct Connection {
        sender: Option<SyslogSender>,
        closed: bool,
    }

    /// Default context with `name` as the app name, so every line carries
    /// the sender's tag.
    pub fn tagged_context(name: &str) -> SyslogContext {
        let mut context = SyslogContext::default();
        context.appname(name);
        context
    }

    pub(super) fn format_line(
        context: &SyslogContext,
        severity: Severity,
        message: impl Display,
    ) -> String {
        format!(
            "{}",
            context.format_rfc3164(fasyslog::Severity::from(severity), Some(message))
        )
    }

    impl NetworkTransport {
        /// Dial eagerly so construction reports an unreachable daemon.
        pub fn connect(endpoint: SyslogEndpoint, context: SyslogContext) -> io::Result<Self> {
            let sender = dial(&endpoint)?;
            Ok(Self {
                endpoint,
                context,
                state: Mutex::new(Connection {
                    sender: Some(sender),
                    closed: false,
                }),
            })
        }

        pub fn endpoint(&self) -> &SyslogEndpoint {
            &self.endpoint
        }
    }

    impl SyslogTransport for NetworkTransport {
        fn send(&self, severity: Severity, message: &str) -> io::Result<()> {
            let formatted = format_line(&self.context, severity, message);

            let mut conn = self.state.lock();
            if conn.closed {
                return Err(io::Error::new(
                    io::ErrorKind::NotConnected,
                    "syslog transport closed",
                ));
            }
            if conn.sender.is_none() {
                conn.sender = Some(dial(&self.endpoint)?);
            }

            let result = match conn.sender.as_mut() {
                Some(sender) => sender.send_formatted(formatted.as_bytes()),
                None => Err(io::Error::new(io::ErrorKind::NotConnected, "not connected")),
            };
            if result.is_err() {
                conn.sender = None;
            }
            result
        }

        fn close(&self) -> io::Result<()> {
            let mut conn = self.state.lock();
            conn.closed = true;
            match conn.sender.take() {
                Some(mut sender) => sender.flush(),
                None => Ok(()),
            }
        }
    }

    fn dial(endpoint: &SyslogEndpoint) -> io::Result<SyslogSender> {
        match endpoint {
            SyslogEndpoint::Tcp(addr) => fasyslog::sender::tcp(addr.as_str()).map(SyslogSender::Tcp),
            SyslogEndpoint::Udp(addr) => {
                fasyslog::sender::udp("0.0.0.0:0", addr.as_str()).map(SyslogSender::Udp)
            }
            #[cfg(unix)]
            SyslogEndpoint::Unix(path) => fasyslog::sender::unix(path),
            #[cfg(unix)]
            SyslogEndpoint::Local => {
                let mut last = io::Error::new(io::ErrorKind::NotFound, "no local syslog socket");
                for path in WELL_KNOWN_SOCKETS {
                    match fasyslog::sender::unix(path) {
                        Ok(sender) => return Ok(sender),
                        Err(e) => last = e,
                    }
                }
                Err(last)
            }
            #[cfg(not(unix))]
            SyslogEndpoint::Unix(_) | SyslogEndpoint::Local => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "unix syslog sockets are not available on this platform",
            )),
        }
    }
}

/// The default dialer for an endpoint. Lines are tagged with `name`.
pub fn endpoint_dialer(name: &str, endpoint: SyslogEndpoint) -> Dialer {
    #[cfg(feature = "syslog")]
    {
        context_dialer(endpoint, tagged_context(name))
    }
    #[cfg(not(feature = "syslog"))]
    {
        let _ = name;
        Box::new(move || {
            Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("syslog support disabled, cannot dial {}", endpoint),
            ))
        })
    }
}

/// Dialer for an endpoint that formats with a caller-supplied context.
#[cfg(feature = "syslog")]
pub fn context_dialer(endpoint: SyslogEndpoint, context: fasyslog::format::SyslogContext) -> Dialer {
    Box::new(move || {
        NetworkTransport::connect(endpoint.clone(), context.clone())
            .map(|t| Arc::new(t) as Arc<dyn SyslogTransport>)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_display() {
        assert_eq!(SyslogEndpoint::Tcp("10.0.0.5:514".into()).to_string(), "tcp://10.0.0.5:514");
        assert_eq!(SyslogEndpoint::Local.to_string(), "local");
    }

    #[test]
    fn test_endpoint_serde() {
        let endpoint: SyslogEndpoint =
            serde_json::from_str(r#"{"network":"udp","address":"logs:514"}"#).unwrap();
        assert_eq!(endpoint, SyslogEndpoint::Udp("logs:514".into()));

        let local: SyslogEndpoint = serde_json::from_str(r#"{"network":"local"}"#).unwrap();
        assert_eq!(local, SyslogEndpoint::Local);
    }

    #[cfg(feature = "syslog")]
    #[test]
    fn test_unreachable_tcp_fails_to_dial() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = NetworkTransport::connect(SyslogEndpoint::Tcp(addr.to_string()), tagged_context("app"));
        assert!(result.is_err());
    }

    #[cfg(feature = "syslog")]
    #[test]
    fn test_lines_carry_sender_tag() {
        let line = network::format_line(&tagged_context("billing"), Severity::Error, "invoice run failed");

        assert!(line.starts_with('<'));
        assert!(line.contains("billing"));
        assert!(line.contains("invoice run failed"));
    }

    #[cfg(feature = "syslog")]
    #[test]
    fn test_dialer_tags_delivered_lines() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let dialer = endpoint_dialer("payments", SyslogEndpoint::Tcp(addr.to_string()));
        let transport = dialer().unwrap();
        let (mut stream, _) = listener.accept().unwrap();

        transport.send(Severity::Warning, "card declined").unwrap();
        transport.close().unwrap();

        let mut received = String::new();
        std::io::Read::read_to_string(&mut stream, &mut received).unwrap();
        assert!(received.contains("payments"));
        assert!(received.contains("card declined"));
    }
}
