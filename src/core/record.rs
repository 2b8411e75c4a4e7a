//! Log record structure

use super::log_level::LogLevel;
use super::value::Value;
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::panic::Location;

/// Names of the built-in fields in machine readable formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNames {
    pub time: Cow<'static, str>,
    pub level: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

impl Default for KeyNames {
    fn default() -> Self {
        Self {
            time: Cow::Borrowed("t"),
            level: Cow::Borrowed("lvl"),
            message: Cow::Borrowed("msg"),
        }
    }
}

/// Source location of the log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    /// Fully qualified function name, when the logging macro could capture it
    pub function: Option<&'static str>,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self {
            file,
            line,
            function: None,
        }
    }

    /// Location of the caller of the enclosing `#[track_caller]` chain
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }

    #[must_use]
    pub const fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }
}

/// One log event.
///
/// Built once per log call and read by every handler in the chain.
/// Decorators may append attributes before the record reaches a format.
#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub attrs: Vec<Value>,
    pub call: CallSite,
    pub key_names: KeyNames,
}

impl Record {
    #[track_caller]
    pub fn new(level: LogLevel, message: impl Into<String>, attrs: Vec<Value>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            attrs,
            call: CallSite::here(),
            key_names: KeyNames::default(),
        }
    }

    #[must_use]
    pub fn with_call(mut self, call: CallSite) -> Self {
        self.call = call;
        self
    }

    #[must_use]
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn with_key_names(mut self, key_names: KeyNames) -> Self {
        self.key_names = key_names;
        self
    }

    pub fn push_attr(&mut self, value: impl Into<Value>) {
        self.attrs.push(value.into());
    }

    pub fn push_pair(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attrs.push(Value::Str(key.into()));
        self.attrs.push(value.into());
    }

    /// Look up the value of the last `key` pair.
    ///
    /// Attributes are read the way the encoders read them: implicit values
    /// and `Nil` take one slot, any other slot is a key owning the next one.
    pub fn find_pair(&self, key: &str) -> Option<&Value> {
        let mut found = None;
        let mut iter = self.attrs.iter();
        while let Some(slot) = iter.next() {
            if slot.is_single_slot() {
                continue;
            }
            let Some(value) = iter.next() else { break };
            if slot.as_str() == Some(key) {
                found = Some(value);
            }
        }
        found
    }
}
