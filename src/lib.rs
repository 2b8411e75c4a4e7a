//! # Rust Log Pipeline
//!
//! Structured, leveled logging built from composable handlers.
//!
//! A [`Logger`] turns each call into a [`Record`]: a message, a level, a
//! timestamp and a flat list of attributes (`"key", value` pairs plus
//! implicit values such as errors and dumps). The record goes through a
//! chain of [`Handler`]s that filter, annotate, fan out, serialize and
//! finally write it with one of the formats in [`format`].
//!
//! ## Features
//!
//! - **Formats**: logfmt, JSON and a colored terminal layout
//! - **Implicit attributes**: errors, verbose dumps and standalone values
//!   rendered in their own sections
//! - **Composable**: level and predicate filters, caller annotation,
//!   fan-out and serialization as plain decorators
//! - **Registry**: loggers shared by name across libraries
//!
//! ```
//! use rust_log_pipeline::prelude::*;
//! use rust_log_pipeline::{attrs, info};
//!
//! let handler = LevelFilterHandler::new(
//!     LogLevel::Debug,
//!     CallerFileHandler::new(
//!         SyncHandler::new(StreamHandler::new(std::io::stderr(), TerminalFormat::new())),
//!         true,
//!     ),
//! );
//! let logger = Logger::with_handler(handler).child(attrs!["app", "demo"]);
//! info!(logger, "started in {}ms", 12; "workers", 4).unwrap();
//! ```

pub mod core;
pub mod format;
pub mod handlers;
pub mod macros;
pub mod registry;
pub mod report;
pub mod setup;
pub mod writer;

pub mod prelude {
    pub use crate::core::{
        CallSite, CallerTag, Handler, InfrastructureError, LogLevel, Logger, LoggerError, Record,
        Result, SharedHandler, Value,
    };
    pub use crate::format::{Format, JsonFormat, LogfmtFormat, OutputFormat, TerminalFormat, TimeFormat};
    pub use crate::handlers::{
        handler_fn, CallerFileHandler, CallerFuncHandler, CallerStackHandler, DiscardHandler,
        FilterHandler, LevelFilterHandler, MultiHandler, StackFormat, StreamHandler, SyncHandler,
    };
    pub use crate::writer::LogWriter;
}

pub use core::{
    CallSite, CallerTag, Dump, Handler, InfrastructureError, KeyNames, LogLevel, Logger,
    LoggerError, Record, Result, SharedError, SharedHandler, Standalone, Value,
};
pub use writer::LogWriter;
