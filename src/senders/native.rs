//! Console sender
//!
//! Writes one line per message: `[name] [priority] text`. By default lines
//! go to stdout, and error-and-above priorities go to stderr.

use crate::core::{
    Composer, LevelInfo, Priority, Result, Sender, SenderBase, SenderMetrics, SenderType,
};
#[cfg(feature = "console")]
use colored::Colorize;
use parking_lot::Mutex;
use std::io::{self, Write};

enum Target {
    Stdio,
    Writer(Mutex<Box<dyn Write + Send>>),
}

pub struct NativeSender {
    base: SenderBase,
    target: Target,
    use_colors: bool,
}

impl NativeSender {
    pub fn new(name: impl Into<String>, level: LevelInfo) -> Result<Self> {
        Ok(Self {
            base: SenderBase::new(name, level)?,
            target: Target::Stdio,
            use_colors: cfg!(feature = "console"),
        })
    }

    /// Write every line to `writer` instead of stdout/stderr. Colors are off.
    pub fn with_writer(
        name: impl Into<String>,
        level: LevelInfo,
        writer: Box<dyn Write + Send>,
    ) -> Result<Self> {
        Ok(Self {
            base: SenderBase::new(name, level)?,
            target: Target::Writer(Mutex::new(writer)),
            use_colors: false,
        })
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors && cfg!(feature = "console");
        self
    }

    pub fn metrics(&self) -> &SenderMetrics {
        self.base.metrics()
    }

    fn format_line(&self, priority: Priority, text: &str) -> String {
        let label = priority.to_string();
        #[cfg(feature = "console")]
        let label = if self.use_colors {
            label.color(priority.color_code()).to_string()
        } else {
            label
        };
        format!("[{}] [{}] {}", self.base.name(), label, text)
    }

    fn write_line(&self, priority: Priority, line: &str) -> io::Result<()> {
        match self.target {
            Target::Stdio if priority >= Priority::ERROR => {
                let mut err = io::stderr().lock();
                writeln!(err, "{}", line)
            }
            Target::Stdio => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", line)
            }
            Target::Writer(ref writer) => {
                let mut writer = writer.lock();
                writeln!(writer, "{}", line)?;
                writer.flush()
            }
        }
    }
}

impl Sender for NativeSender {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn sender_type(&self) -> SenderType {
        SenderType::Native
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
        let line = self.format_line(priority, text);

        match self.write_line(priority, &line) {
            Ok(()) => {
                self.base.metrics().record_primary();
            }
            Err(e) => self.base.report_failure("native", &e, priority, text),
        }
    }

    fn flush(&self) -> Result<()> {
        match self.target {
            Target::Stdio => {
                io::stdout().flush()?;
                io::stderr().flush()?;
            }
            Target::Writer(ref writer) => writer.lock().flush()?,
        }
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.flush()
    }
}
