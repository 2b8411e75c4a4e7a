//! Sink-writing handler

use crate::core::{Handler, LoggerError, Record, Result};
use crate::format::Format;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Formats each record and writes it to a sink with a single `write_all`.
///
/// The sink is shared between callers, so it must be writable through a
/// shared reference (`Stdout`, `Stderr`, `File`, `TcpStream` all are).
/// Concurrent writes are only guaranteed not to interleave when the handler
/// is wrapped in a [`SyncHandler`](super::SyncHandler).
pub struct StreamHandler<W, F> {
    writer: W,
    format: F,
}

impl<W, F> StreamHandler<W, F>
where
    for<'a> &'a W: Write,
    W: Send + Sync,
    F: Format,
{
    pub fn new(writer: W, format: F) -> Self {
        Self { writer, format }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<F: Format> StreamHandler<File, F> {
    /// Append records to the file at `path`, creating it if needed
    pub fn file(path: impl AsRef<Path>, format: F) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(format!("opening log file '{}'", path.display()), e)
            })?;
        Ok(Self::new(file, format))
    }
}

impl<W, F> Handler for StreamHandler<W, F>
where
    for<'a> &'a W: Write,
    W: Send + Sync,
    F: Format,
{
    fn log(&self, record: &mut Record) -> Result<()> {
        let bytes = self.format.format(record);
        (&self.writer).write_all(&bytes)?;
        Ok(())
    }
}
