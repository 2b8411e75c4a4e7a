//! Handler trait for the record pipeline

use super::{error::Result, record::Record};
use std::sync::Arc;

/// A pipeline stage: writes, filters, annotates or forwards a record.
///
/// Decorators hold their inner handler and call it after their own work.
/// Errors from any stage are returned to the emitter unchanged.
pub trait Handler: Send + Sync {
    fn log(&self, record: &mut Record) -> Result<()>;
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn log(&self, record: &mut Record) -> Result<()> {
        (**self).log(record)
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn log(&self, record: &mut Record) -> Result<()> {
        (**self).log(record)
    }
}

pub type SharedHandler = Arc<dyn Handler>;
