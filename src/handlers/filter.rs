//! Filtering handlers

use crate::core::{Handler, LogLevel, Record, Result};

/// Forwards records at least as severe as `max_level`, drops the rest.
///
/// `LevelFilterHandler::new(LogLevel::Warn, h)` passes `Crit`, `Error`
/// and `Warn` records to `h`.
pub struct LevelFilterHandler<H> {
    max_level: LogLevel,
    inner: H,
}

impl<H: Handler> LevelFilterHandler<H> {
    pub fn new(max_level: LogLevel, inner: H) -> Self {
        Self { max_level, inner }
    }

    pub fn max_level(&self) -> LogLevel {
        self.max_level
    }
}

impl<H: Handler> Handler for LevelFilterHandler<H> {
    fn log(&self, record: &mut Record) -> Result<()> {
        if !record.level.is_at_least(self.max_level) {
            return Ok(());
        }
        self.inner.log(record)
    }
}

/// Forwards records for which the predicate returns true
pub struct FilterHandler<P, H> {
    predicate: P,
    inner: H,
}

impl<P, H> FilterHandler<P, H>
where
    P: Fn(&Record) -> bool + Send + Sync,
    H: Handler,
{
    pub fn new(predicate: P, inner: H) -> Self {
        Self { predicate, inner }
    }
}

impl<P, H> Handler for FilterHandler<P, H>
where
    P: Fn(&Record) -> bool + Send + Sync,
    H: Handler,
{
    fn log(&self, record: &mut Record) -> Result<()> {
        if !(self.predicate)(record) {
            return Ok(());
        }
        self.inner.log(record)
    }
}

/// Accepts and drops every record
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardHandler;

impl Handler for DiscardHandler {
    fn log(&self, _record: &mut Record) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::handlers::test_util::RecordingHandler;
    use std::sync::Arc;

    #[test]
    fn test_level_filter_threshold() {
        for threshold in LogLevel::ALL {
            for level in LogLevel::ALL {
                let recorder = Arc::new(RecordingHandler::new());
                let handler = LevelFilterHandler::new(threshold, Arc::clone(&recorder));

                let mut record = Record::new(level, "msg", Vec::new());
                handler.log(&mut record).unwrap();

                let expected = usize::from(level <= threshold);
                assert_eq!(recorder.len(), expected, "level {level} threshold {threshold}");
            }
        }
    }

    #[test]
    fn test_predicate_filter() {
        let recorder = Arc::new(RecordingHandler::new());
        let handler = FilterHandler::new(
            |r: &Record| r.find_pair("user").is_some(),
            Arc::clone(&recorder),
        );

        handler.log(&mut Record::new(LogLevel::Info, "anonymous", Vec::new())).unwrap();
        handler
            .log(&mut Record::new(LogLevel::Info, "known", attrs!["user", "ann"]))
            .unwrap();

        let records = recorder.records.lock();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "known");
    }

    #[test]
    fn test_discard() {
        let mut record = Record::new(LogLevel::Crit, "gone", Vec::new());
        assert!(DiscardHandler.log(&mut record).is_ok());
    }
}
