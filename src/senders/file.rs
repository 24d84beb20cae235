//! File sender implementation

use crate::core::{
    Composer, LevelInfo, LoggerError, Priority, Result, Sender, SenderBase, SenderMetrics,
    SenderType,
};
use chrono::Local;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one line per message to a file: `[time] [priority] text`.
pub struct FileSender {
    base: SenderBase,
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl FileSender {
    /// Fails when the file cannot be opened; there is no fallback for a
    /// sender whose only job is this file.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, level: LevelInfo) -> Result<Self> {
        let base = SenderBase::new(name, level)?;
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            base,
            path,
            writer: Mutex::new(Some(BufWriter::new(file))),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metrics(&self) -> &SenderMetrics {
        self.base.metrics()
    }

    fn write_line(&self, priority: Priority, text: &str) -> Result<()> {
        let mut guard = self.writer.lock();
        let writer = guard
            .as_mut()
            .ok_or_else(|| LoggerError::closed(self.base.name()))?;

        writeln!(
            writer,
            "[{}] [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            priority,
            text
        )?;
        writer.flush()?;
        Ok(())
    }
}

impl Sender for FileSender {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn sender_type(&self) -> SenderType {
        SenderType::File
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

        match self.write_line(priority, text) {
            Ok(()) => {
                self.base.metrics().record_primary();
            }
            Err(e) => self.base.report_failure("file", &e, priority, text),
        }
    }

    fn flush(&self) -> Result<()> {
        if let Some(ref mut writer) = *self.writer.lock() {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&self) -> Result<()> {
        match self.writer.lock().take() {
            Some(mut writer) => {
                writer.flush()?;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Drop for FileSender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::StringMessage;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_sender_writes_lines() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.log");
        let sender = FileSender::new("app", &path, LevelInfo::uniform(Priority::INFO))?;

        sender.send(&StringMessage::new(Priority::ERROR, "disk full"));
        sender.send(&StringMessage::new(Priority::DEBUG, "hidden"));
        sender.flush()?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("[error] disk full"));
        Ok(())
    }

    #[test]
    fn test_close_is_safe_twice() -> Result<()> {
        let dir = tempdir()?;
        let sender = FileSender::new("app", dir.path().join("a.log"), LevelInfo::uniform(Priority::INFO))?;

        sender.close()?;
        sender.close()?;

        sender.send(&StringMessage::new(Priority::ERROR, "after close"));
        assert_eq!(sender.metrics().send_errors(), 1);
        assert_eq!(sender.metrics().fallback_delivered(), 1);
        Ok(())
    }

    #[test]
    fn test_open_failure_is_returned() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing").join("app.log");
        let result = FileSender::new("app", missing, LevelInfo::uniform(Priority::INFO));
        assert!(matches!(result, Err(LoggerError::IoError(_))));
    }
}
