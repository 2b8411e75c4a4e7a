//! Background logging of errors reported by other components
//!
//! Components that fail away from any caller (an upload client, a flush
//! worker) push their errors into a channel; [`drain_errors`] logs them.

use crate::core::{LoggerError, Logger, Result, Value};
use crossbeam_channel::Receiver;
use std::thread::{self, JoinHandle};

/// Message of the records written by [`drain_errors`]
pub const DRAIN_MESSAGE: &str = "Background error";

/// Spawn a thread logging every error received on `errors` at error level,
/// with the error as an implicit attribute. The thread ends when every
/// sender is dropped.
///
/// ```
/// use rust_log_pipeline::{report, Logger};
///
/// let (tx, rx) = crossbeam_channel::unbounded::<std::io::Error>();
/// let drain = report::drain_errors(rx, Logger::new(Vec::new())).unwrap();
/// tx.send(std::io::Error::other("upload refused")).unwrap();
/// drop(tx);
/// drain.join().unwrap();
/// ```
pub fn drain_errors<E>(errors: Receiver<E>, logger: Logger) -> Result<JoinHandle<()>>
where
    E: Into<Value> + Send + 'static,
{
    thread::Builder::new()
        .name("log-error-drain".to_string())
        .spawn(move || {
            for err in errors {
                if let Err(e) = logger.error(DRAIN_MESSAGE, vec![err.into()]) {
                    eprintln!("[LOGGER ERROR] Failed to log background error: {}", e);
                }
            }
        })
        .map_err(|e| LoggerError::io_operation("spawning error drain thread", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InfrastructureError, LogLevel};
    use crate::handlers::test_util::RecordingHandler;
    use std::io;
    use std::sync::Arc;

    #[test]
    fn test_drains_until_channel_closes() {
        let recorder = Arc::new(RecordingHandler::new());
        let logger = Logger::with_handler(Arc::clone(&recorder));
        let (tx, rx) = crossbeam_channel::unbounded::<io::Error>();

        let drain = drain_errors(rx, logger).unwrap();
        tx.send(io::Error::other("first")).unwrap();
        tx.send(io::Error::other("second")).unwrap();
        drop(tx);
        drain.join().unwrap();

        let records = recorder.records.lock();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, LogLevel::Error);
        assert_eq!(records[0].message, DRAIN_MESSAGE);
        match &records[1].attrs[..] {
            [Value::Error(err)] => assert_eq!(err.to_string(), "second"),
            other => panic!("unexpected attributes {other:?}"),
        }
    }

    #[test]
    fn test_handler_failure_keeps_draining() {
        let recorder = Arc::new(RecordingHandler::failing());
        let logger = Logger::with_handler(Arc::clone(&recorder));
        let (tx, rx) = crossbeam_channel::bounded::<InfrastructureError>(4);

        let drain = drain_errors(rx, logger).unwrap();
        for i in 0..3 {
            tx.send(InfrastructureError::new(format!("retry {i}"))).unwrap();
        }
        drop(tx);
        drain.join().unwrap();

        assert_eq!(recorder.len(), 3);
    }
}
