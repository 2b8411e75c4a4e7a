//! Core logger types and traits

pub mod error;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod record;
pub mod value;

pub use error::{LoggerError, Result};
pub use handler::{Handler, SharedHandler};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use record::{CallSite, KeyNames, Record};
pub use value::{CallerTag, Dump, InfrastructureError, SharedError, Standalone, Value};
