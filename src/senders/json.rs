//! JSON sender for structured logging
//!
//! Writes each message as a single-line JSON object (JSONL), either to
//! stdout or to a file.

use crate::core::{
    Composer, LevelInfo, LoggerError, Priority, Result, Sender, SenderBase, SenderMetrics,
    SenderType,
};
use chrono::Utc;
use parking_lot::Mutex;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
struct JsonRecord<'a> {
    name: &'a str,
    priority: Priority,
    level: String,
    time: String,
    message: &'a str,
    payload: serde_json::Value,
}

pub struct JsonSender {
    base: SenderBase,
    kind: SenderType,
    writer: Mutex<Option<Box<dyn Write + Send>>>,
}

impl JsonSender {
    pub fn console(name: impl Into<String>, level: LevelInfo) -> Result<Self> {
        Self::build(name, level, SenderType::JsonConsole, Box::new(io::stdout()))
    }

    pub fn file<P: AsRef<Path>>(name: impl Into<String>, path: P, level: LevelInfo) -> Result<Self> {
        let base = SenderBase::new(name, level)?;
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            base,
            kind: SenderType::JsonFile,
            writer: Mutex::new(Some(Box::new(BufWriter::new(file)))),
        })
    }

    /// JSON lines to an arbitrary writer, reported as a console sender.
    pub fn with_writer(
        name: impl Into<String>,
        level: LevelInfo,
        writer: Box<dyn Write + Send>,
    ) -> Result<Self> {
        Self::build(name, level, SenderType::JsonConsole, writer)
    }

    fn build(
        name: impl Into<String>,
        level: LevelInfo,
        kind: SenderType,
        writer: Box<dyn Write + Send>,
    ) -> Result<Self> {
        Ok(Self {
            base: SenderBase::new(name, level)?,
            kind,
            writer: Mutex::new(Some(writer)),
        })
    }

    pub fn metrics(&self) -> &SenderMetrics {
        self.base.metrics()
    }

    fn write_record(&self, priority: Priority, message: &dyn Composer) -> Result<()> {
        let record = JsonRecord {
            name: self.base.name(),
            priority,
            level: priority.to_string(),
            time: Utc::now().to_rfc3339(),
            message: message.render(),
            payload: message.raw(),
        };
        let json = serde_json::to_string(&record)?;

        let mut guard = self.writer.lock();
        let writer = guard
            .as_mut()
            .ok_or_else(|| LoggerError::closed(self.base.name()))?;
        writeln!(writer, "{}", json)?;
        if self.kind == SenderType::JsonConsole {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Sender for JsonSender {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn sender_type(&self) -> SenderType {
        self.kind
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

        match self.write_record(priority, message) {
            Ok(()) => {
                self.base.metrics().record_primary();
            }
            Err(e) => self.base.report_failure("json", &e, priority, message.render()),
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
            Some(mut writer) => Ok(writer.flush()?),
            None => Ok(()),
        }
    }
}

impl Drop for JsonSender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
