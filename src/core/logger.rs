//! Logger handle building records and passing them to a handler

use super::{
    error::Result,
    handler::{Handler, SharedHandler},
    log_level::LogLevel,
    record::{CallSite, Record},
    value::Value,
};
use crate::handlers::DiscardHandler;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

type HandlerSlot = RwLock<SharedHandler>;

static ROOT: Lazy<Logger> = Lazy::new(|| Logger::with_handler(DiscardHandler));

struct LoggerState {
    ctx: Vec<Value>,
    slot: Arc<HandlerSlot>,
}

/// Cheaply cloneable logging handle.
///
/// A logger carries context attributes that prefix the attributes of every
/// record it emits, and a swappable handler. Clones share both, so
/// `set_handler` on one clone is observed by all of them.
///
/// # Example
///
/// ```
/// use rust_log_pipeline::prelude::*;
/// use rust_log_pipeline::attrs;
///
/// let logger = Logger::with_handler(StreamHandler::new(std::io::stdout(), LogfmtFormat::new()));
/// let requests = logger.child(attrs!["component", "http"]);
/// requests.info("request served", attrs!["status", 200]).unwrap();
/// ```
#[derive(Clone)]
pub struct Logger {
    state: Arc<RwLock<LoggerState>>,
}

impl Logger {
    /// Logger without context using `handler`
    pub fn with_handler(handler: impl Handler + 'static) -> Self {
        Self::from_parts(Vec::new(), Arc::new(handler))
    }

    /// Process-wide root logger; discards records until a handler is set
    pub fn root() -> Logger {
        ROOT.clone()
    }

    /// Child of the root logger with additional context
    pub fn new(ctx: Vec<Value>) -> Self {
        Self::root().child(ctx)
    }

    fn from_parts(ctx: Vec<Value>, handler: SharedHandler) -> Self {
        Self {
            state: Arc::new(RwLock::new(LoggerState {
                ctx,
                slot: Arc::new(RwLock::new(handler)),
            })),
        }
    }

    /// New logger whose context is this logger's context followed by `ctx`.
    ///
    /// The child delegates to whatever handler this logger has at the time
    /// of each call, until the child gets its own handler.
    pub fn child(&self, ctx: Vec<Value>) -> Logger {
        let state = self.state.read();
        let mut merged = state.ctx.clone();
        merged.extend(ctx);
        let parent = ParentHandler(Arc::clone(&state.slot));
        Self::from_parts(merged, Arc::new(parent))
    }

    pub fn set_handler(&self, handler: impl Handler + 'static) {
        self.set_shared_handler(Arc::new(handler));
    }

    pub fn set_shared_handler(&self, handler: SharedHandler) {
        let slot = Arc::clone(&self.state.read().slot);
        *slot.write() = handler;
    }

    pub fn handler(&self) -> SharedHandler {
        Arc::clone(&self.state.read().slot.read())
    }

    pub fn context(&self) -> Vec<Value> {
        self.state.read().ctx.clone()
    }

    /// Whether both handles point to the same logger
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// Replace this logger's context and handler with the ones of `source`.
    ///
    /// Every existing clone of `self` observes the change.
    pub(crate) fn overwrite_from(&self, source: &Logger) {
        if self.ptr_eq(source) {
            return;
        }
        let copied = {
            let src = source.state.read();
            LoggerState {
                ctx: src.ctx.clone(),
                slot: Arc::clone(&src.slot),
            }
        };
        *self.state.write() = copied;
    }

    /// Build a record at `call` and pass it to the handler
    pub fn log_at(
        &self,
        call: CallSite,
        level: LogLevel,
        message: impl Into<String>,
        attrs: Vec<Value>,
    ) -> Result<()> {
        let (mut all, handler) = {
            let state = self.state.read();
            let handler = Arc::clone(&state.slot.read());
            (state.ctx.clone(), handler)
        };
        all.extend(attrs);
        let mut record = Record::new(level, message, all).with_call(call);
        handler.log(&mut record)
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>, attrs: Vec<Value>) -> Result<()> {
        self.log_at(CallSite::here(), level, message, attrs)
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>, attrs: Vec<Value>) -> Result<()> {
        self.log(LogLevel::Trace, message, attrs)
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>, attrs: Vec<Value>) -> Result<()> {
        self.log(LogLevel::Debug, message, attrs)
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>, attrs: Vec<Value>) -> Result<()> {
        self.log(LogLevel::Info, message, attrs)
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>, attrs: Vec<Value>) -> Result<()> {
        self.log(LogLevel::Warn, message, attrs)
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>, attrs: Vec<Value>) -> Result<()> {
        self.log(LogLevel::Error, message, attrs)
    }

    #[inline]
    #[track_caller]
    pub fn crit(&self, message: impl Into<String>, attrs: Vec<Value>) -> Result<()> {
        self.log(LogLevel::Crit, message, attrs)
    }
}

/// Forwards to the current handler of a parent logger
struct ParentHandler(Arc<HandlerSlot>);

impl Handler for ParentHandler {
    fn log(&self, record: &mut Record) -> Result<()> {
        let handler = Arc::clone(&self.0.read());
        handler.log(record)
    }
}
