//! Record formats
//!
//! A format turns a fully assembled [`Record`] into bytes. Formats are pure:
//! they never fail, and problems with individual attributes are rendered in
//! band instead.
//!
//! - [`LogfmtFormat`]: `t=... lvl=... msg="..." key=value`
//! - [`JsonFormat`]: one JSON object per record
//! - [`TerminalFormat`]: aligned, optionally colored output for humans

pub mod json;
pub mod logfmt;
pub mod terminal;
pub mod timestamp;
pub mod value;

pub use json::JsonFormat;
pub use logfmt::{write_attrs, LogfmtFormat};
pub use terminal::TerminalFormat;
pub use timestamp::TimeFormat;
pub use value::{escape_string, format_json_value, format_logfmt_value, quote_string};

use crate::core::{LoggerError, Record};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub trait Format: Send + Sync {
    fn format(&self, record: &Record) -> Vec<u8>;
}

impl<F: Format + ?Sized> Format for Box<F> {
    fn format(&self, record: &Record) -> Vec<u8> {
        (**self).format(record)
    }
}

impl<F: Format + ?Sized> Format for std::sync::Arc<F> {
    fn format(&self, record: &Record) -> Vec<u8> {
        (**self).format(record)
    }
}

/// Adapter turning a closure into a [`Format`]
#[derive(Clone)]
pub struct FormatFn<F>(F);

impl<F> Format for FormatFn<F>
where
    F: Fn(&Record) -> Vec<u8> + Send + Sync,
{
    fn format(&self, record: &Record) -> Vec<u8> {
        (self.0)(record)
    }
}

/// Use `f` to format records
pub fn format_fn<F>(f: F) -> FormatFn<F>
where
    F: Fn(&Record) -> Vec<u8> + Send + Sync,
{
    FormatFn(f)
}

/// Format selector used by configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal format (default)
    ///
    /// Example: `INFO app 11-20 01:34:22 src/main.rs:12] Request processed    id=7`
    #[default]
    Terminal,

    /// JSON format for machine processing
    ///
    /// Example: `{"lvl":"info","msg":"Request processed","t":"2015-11-20T01:34:22Z"}`
    Json,

    /// Logfmt format (key=value pairs)
    ///
    /// Example: `t=2015-11-20T01:34:22+0000 lvl=info msg="Request processed"`
    Logfmt,
}

impl OutputFormat {
    /// Build the selected format. `name`, `color` and `time_format` only
    /// affect the terminal format.
    pub fn build(&self, name: &str, color: bool, time_format: TimeFormat) -> Box<dyn Format> {
        match self {
            OutputFormat::Terminal => Box::new(
                TerminalFormat::new()
                    .with_name(name)
                    .with_color(color)
                    .with_time_format(time_format),
            ),
            OutputFormat::Json => Box::new(JsonFormat::new()),
            OutputFormat::Logfmt => Box::new(LogfmtFormat::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Terminal => "terminal",
            OutputFormat::Json => "json",
            OutputFormat::Logfmt => "logfmt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "text" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "logfmt" => Ok(OutputFormat::Logfmt),
            other => Err(LoggerError::config(
                "OutputFormat",
                format!("unknown format '{other}'"),
            )),
        }
    }
}

impl Serialize for OutputFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OutputFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
