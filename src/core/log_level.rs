//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity of a record.
///
/// Lower ordinal means more severe: `Crit` is 0 and `Trace` is 5, so
/// "at least as severe as `t`" is `level <= t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Crit = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Crit,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Crit => "crit",
            LogLevel::Error => "eror",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "dbug",
            LogLevel::Trace => "trce",
        }
    }

    pub fn as_str_upper(&self) -> &'static str {
        match self {
            LogLevel::Crit => "CRIT",
            LogLevel::Error => "EROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DBUG",
            LogLevel::Trace => "TRCE",
        }
    }

    /// Whether this level passes a filter whose least severe accepted level is `threshold`
    #[inline]
    pub fn is_at_least(self, threshold: LogLevel) -> bool {
        self <= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crit" | "critical" | "0" => Ok(LogLevel::Crit),
            "eror" | "error" | "1" => Ok(LogLevel::Error),
            "warn" | "warning" | "2" => Ok(LogLevel::Warn),
            "info" | "3" => Ok(LogLevel::Info),
            "dbug" | "debug" | "4" => Ok(LogLevel::Debug),
            "trce" | "trace" | "5" => Ok(LogLevel::Trace),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
