//! `io::Write` adapter over a logger

use crate::core::{CallSite, LogLevel, Logger};
use std::io::{self, Write};

/// Turns each `write` call into one log record at a fixed level, for
/// libraries that only accept an `io::Write` sink.
///
/// One trailing line break is dropped from the message. Empty writes are
/// accepted without logging.
///
/// ```
/// use rust_log_pipeline::{LogLevel, LogWriter, Logger};
/// use std::io::Write;
///
/// let mut out = LogWriter::new(Logger::new(Vec::new()), LogLevel::Debug);
/// writeln!(out, "legacy output").unwrap();
/// ```
#[derive(Clone)]
pub struct LogWriter {
    logger: Logger,
    level: LogLevel,
    call: CallSite,
}

impl LogWriter {
    #[track_caller]
    pub fn new(logger: Logger, level: LogLevel) -> Self {
        Self {
            logger,
            level,
            call: CallSite::here(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let text: &str = &text;
        let message = text
            .strip_suffix('\n')
            .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
            .unwrap_or(text);
        if !message.is_empty() {
            self.logger
                .log_at(self.call, self.level, message, Vec::new())
                .map_err(io::Error::other)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
