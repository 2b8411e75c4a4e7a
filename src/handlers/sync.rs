//! Serializing handler

use crate::core::{Handler, Record, Result};
use parking_lot::Mutex;

/// Runs the inner handler under a mutex so concurrent emitters never
/// interleave their writes. Place it directly around sinks that are not
/// safe for concurrent use.
pub struct SyncHandler<H> {
    inner: Mutex<H>,
}

impl<H: Handler> SyncHandler<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }
}

impl<H: Handler> Handler for SyncHandler<H> {
    fn log(&self, record: &mut Record) -> Result<()> {
        self.inner.lock().log(record)
    }
}
