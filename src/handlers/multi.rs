//! Fan-out handler

use crate::core::{Handler, LoggerError, Record, Result, SharedHandler};
use std::sync::Arc;

/// Delivers every record to each handler in order.
///
/// A failing handler does not stop delivery to the ones after it; all
/// failures are returned together.
#[derive(Clone, Default)]
pub struct MultiHandler {
    handlers: Vec<SharedHandler>,
}

impl MultiHandler {
    pub fn new(handlers: Vec<SharedHandler>) -> Self {
        Self { handlers }
    }

    #[must_use]
    pub fn with_handler(mut self, handler: impl Handler + 'static) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Handler for MultiHandler {
    fn log(&self, record: &mut Record) -> Result<()> {
        let errors: Vec<LoggerError> = self
            .handlers
            .iter()
            .filter_map(|handler| handler.log(record).err())
            .collect();
        match LoggerError::combine(errors) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use crate::handlers::test_util::RecordingHandler;

    #[test]
    fn test_continues_after_failure() {
        let first = Arc::new(RecordingHandler::new());
        let second = Arc::new(RecordingHandler::failing());
        let third = Arc::new(RecordingHandler::new());
        let handler = MultiHandler::new(vec![
            first.clone() as SharedHandler,
            second.clone() as SharedHandler,
            third.clone() as SharedHandler,
        ]);

        let mut record = Record::new(LogLevel::Error, "fan out", Vec::new());
        let result = handler.log(&mut record);

        assert!(result.is_err());
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(third.len(), 1);
    }

    #[test]
    fn test_aggregates_every_failure() {
        let handler = MultiHandler::default()
            .with_handler(RecordingHandler::failing())
            .with_handler(RecordingHandler::new())
            .with_handler(RecordingHandler::failing());

        let mut record = Record::new(LogLevel::Error, "fan out", Vec::new());
        match handler.log(&mut record) {
            Err(LoggerError::Multiple(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected aggregate error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_multi_succeeds() {
        let mut record = Record::new(LogLevel::Info, "nobody listens", Vec::new());
        assert!(MultiHandler::default().log(&mut record).is_ok());
    }
}
