//! Closure adapter

use crate::core::{Handler, Record, Result};

/// Handler backed by a plain function
#[derive(Clone)]
pub struct FuncHandler<F>(F);

impl<F> Handler for FuncHandler<F>
where
    F: Fn(&mut Record) -> Result<()> + Send + Sync,
{
    fn log(&self, record: &mut Record) -> Result<()> {
        (self.0)(record)
    }
}

/// Use `f` as a handler
pub fn handler_fn<F>(f: F) -> FuncHandler<F>
where
    F: Fn(&mut Record) -> Result<()> + Send + Sync,
{
    FuncHandler(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, LoggerError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_calls_function() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let handler = handler_fn(move |record: &mut Record| {
            counter.fetch_add(1, Ordering::SeqCst);
            record.push_pair("seen", true);
            Ok(())
        });

        let mut record = Record::new(LogLevel::Info, "hi", Vec::new());
        handler.log(&mut record).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(record.find_pair("seen").is_some());
    }

    #[test]
    fn test_returns_function_error() {
        let handler = handler_fn(|_: &mut Record| Err(LoggerError::handler("rejected")));
        let mut record = Record::new(LogLevel::Info, "hi", Vec::new());
        assert_eq!(
            handler.log(&mut record).unwrap_err().to_string(),
            "Handler error: rejected"
        );
    }
}
