//! Always-available fallback transport
//!
//! Every sender owns one. It writes plain lines prefixed with `[name] ` and a
//! local timestamp, by default to standard output. Write errors are dropped:
//! there is nowhere left to report them.

use chrono::Local;
use parking_lot::Mutex;
use std::io::{self, Write};

pub struct FallbackLogger {
    prefix: String,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl FallbackLogger {
    pub fn stdout(name: &str) -> Self {
        Self::with_writer(name, Box::new(io::stdout()))
    }

    pub fn with_writer(name: &str, writer: Box<dyn Write + Send>) -> Self {
        Self {
            prefix: format!("[{}] ", name),
            writer: Mutex::new(writer),
        }
    }

    pub fn log(&self, line: &str) {
        let stamped = format!(
            "{}{} {}\n",
            self.prefix,
            Local::now().format("%Y/%m/%d %H:%M:%S"),
            line.trim_end_matches('\n')
        );
        let mut writer = self.writer.lock();
        let _ = writer.write_all(stamped.as_bytes());
        let _ = writer.flush();
    }
}

impl std::fmt::Debug for FallbackLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackLogger")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

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

    #[test]
    fn test_prefix_and_single_line() {
        let buffer = Buffer::default();
        let fallback = FallbackLogger::with_writer("audit", Box::new(buffer.clone()));

        fallback.log("syslog error: connection refused\n");

        let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert!(output.starts_with("[audit] "));
        assert!(output.ends_with("syslog error: connection refused\n"));
        assert_eq!(output.lines().count(), 1);
    }
}
