//! Bootstrap of the default pipeline from a configuration object
//!
//! ```no_run
//! use rust_log_pipeline::setup::{self, Config};
//! use rust_log_pipeline::LogLevel;
//!
//! let config = Config {
//!     color: true,
//!     level: LogLevel::Debug,
//!     ..Config::default()
//! };
//! let root = setup::init("myapp", &config).unwrap();
//! root.debug("ready", Vec::new()).unwrap();
//! ```

use crate::core::{LogLevel, Logger, LoggerError, Result, SharedHandler};
use crate::format::{OutputFormat, TimeFormat};
use crate::handlers::{CallerFileHandler, LevelFilterHandler, MultiHandler, StreamHandler, SyncHandler};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::Arc;

/// Shortest accepted application name
pub const MIN_NAME_LEN: usize = 2;
/// Longest accepted application name
pub const MAX_NAME_LEN: usize = 200;

/// Logger configuration, usually loaded from a config file.
///
/// ```
/// use rust_log_pipeline::setup::Config;
///
/// let config: Config = serde_json::from_str(r#"{"color":true,"timeFmt":"sec","level":"debug"}"#).unwrap();
/// assert!(config.check().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color: bool,
    #[serde(rename = "timeFmt")]
    pub time_format: TimeFormat,
    pub level: LogLevel,
    pub format: OutputFormat,
}

impl Config {
    /// Validate the parts of the config that types alone cannot enforce
    pub fn check(&self) -> Result<()> {
        if let TimeFormat::Custom(pattern) = &self.time_format {
            pattern.parse::<TimeFormat>()?;
        }
        Ok(())
    }
}

/// Validate an application or environment name.
///
/// Names are 2 to 200 characters of ASCII letters, digits, `-`, `_` and
/// `.`. `what` names the kind of name in the error message.
pub fn check_app_name(name: &str, what: &str) -> Result<()> {
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid_chars && (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.len()) {
        return Ok(());
    }
    Err(LoggerError::config(
        what,
        format!(
            "wrong name '{name}', expected {MIN_NAME_LEN} to {MAX_NAME_LEN} characters \
             of [A-Za-z0-9-_.]"
        ),
    ))
}

/// `env:app` logger name, after validating both parts
pub fn app_logger_name(env: &str, app: &str) -> Result<String> {
    check_app_name(env, "environment name")?;
    check_app_name(app, "application name")?;
    Ok(format!("{env}:{app}"))
}

/// Build the default pipeline writing to `writer`:
/// level filter, short caller file, fan-out to `extra` handlers when there
/// are any, synchronization, and finally the stream.
pub fn build_handler<W>(
    name: &str,
    config: &Config,
    writer: W,
    extra: Vec<SharedHandler>,
) -> Result<SharedHandler>
where
    for<'a> &'a W: Write,
    W: Send + Sync + 'static,
{
    config.check()?;

    let format = config
        .format
        .build(name, config.color, config.time_format.clone());
    let sink: SharedHandler = Arc::new(SyncHandler::new(StreamHandler::new(writer, format)));

    let delivery: SharedHandler = if extra.is_empty() {
        sink
    } else {
        let mut handlers = Vec::with_capacity(extra.len() + 1);
        handlers.push(sink);
        handlers.extend(extra);
        Arc::new(MultiHandler::new(handlers))
    };

    Ok(Arc::new(LevelFilterHandler::new(
        config.level,
        CallerFileHandler::new(delivery, true),
    )))
}

/// Install the default stderr pipeline on the root logger and return it
pub fn init(name: &str, config: &Config) -> Result<Logger> {
    init_with_writer(name, config, io::stderr(), Vec::new())
}

/// Like [`init`], writing to `writer` and fanning out to `extra`
pub fn init_with_writer<W>(
    name: &str,
    config: &Config,
    writer: W,
    extra: Vec<SharedHandler>,
) -> Result<Logger>
where
    for<'a> &'a W: Write,
    W: Send + Sync + 'static,
{
    let handler = build_handler(name, config, writer, extra)?;
    let root = Logger::root();
    root.set_shared_handler(handler);
    root.debug("Logger initialized", vec!["name".into(), name.into()])?;
    Ok(root)
}
