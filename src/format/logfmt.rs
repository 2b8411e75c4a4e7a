//! Logfmt encoding and the shared attribute walk
//!
//! The attribute walk reads the flat attribute list in one pass: string keys
//! pair with the following slot, while implicit errors, dumps and standalone
//! values are collected and printed after the `key=value` line.

use super::terminal::bold;
use super::value::{format_dump, format_logfmt_value};
use super::json::CALLER_KEY;
use super::Format;
use crate::core::{Dump, InfrastructureError, Record, SharedError, Standalone, Value};
use crate::handlers::find_caller;

pub const MALFORMED_KEY: &str = "MALFORMED_LOGFMT_KEY";
pub const MALFORMED_NO_VALUE: &str = "MALFORMED_LOGFMT: no value for last key";

const ERROR_HEADER: &str = "-------- ERROR --------\n";
const ERROR_INFRA_HEADER: &str = "-------- ERROR (infrastructure) --------\n";

/// Write `attrs` as space separated `key=value` pairs followed by the
/// deferred sections, ending with a newline.
///
/// Every slot after the first is preceded by a space, including slots that
/// are skipped or deferred. A `Nil` or caller tag in key position is skipped.
pub fn write_attrs<'a, I>(buf: &mut String, attrs: I, bold_keys: bool)
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut errors: Vec<&SharedError> = Vec::new();
    let mut dumps: Vec<&Dump> = Vec::new();
    let mut alones: Vec<&Standalone> = Vec::new();

    let mut iter = attrs.into_iter();
    let mut first = true;
    while let Some(slot) = iter.next() {
        if !first {
            buf.push(' ');
        }
        first = false;

        let key = match slot {
            Value::Error(err) => {
                errors.push(err);
                continue;
            }
            Value::Dump(dump) => {
                dumps.push(dump);
                continue;
            }
            Value::Standalone(alone) => {
                alones.push(alone);
                continue;
            }
            Value::Nil | Value::Caller(_) => continue,
            Value::Str(key) => key.as_str(),
            _ => MALFORMED_KEY,
        };
        let value = match iter.next() {
            Some(value) => format_logfmt_value(value),
            None => MALFORMED_NO_VALUE.to_string(),
        };

        if bold_keys {
            buf.push_str(&bold(key));
        } else {
            buf.push_str(key);
        }
        buf.push('=');
        buf.push_str(&value);
    }

    for alone in alones {
        buf.push_str("\n  * ");
        buf.push_str(&alone.title);
        buf.push_str(": ");
        buf.push_str(&format_logfmt_value(&alone.value));
    }
    for dump in &dumps {
        buf.push_str("\n-------- ");
        buf.push_str(dump.title());
        buf.push_str(" --------\n");
        buf.push_str(&format_dump(dump));
    }
    // a dump already ends with its own newline
    if dumps.is_empty() {
        buf.push('\n');
    }
    for err in errors {
        write_error(buf, err);
    }
}

fn write_error(buf: &mut String, err: &SharedError) {
    match (**err).downcast_ref::<InfrastructureError>() {
        Some(infra) => {
            buf.push_str(ERROR_INFRA_HEADER);
            buf.push_str(&infra.to_string());
            buf.push_str("\nstacktrace:\n");
            buf.push_str(infra.backtrace().to_string().trim_end());
        }
        None => {
            buf.push_str(ERROR_HEADER);
            buf.push_str(&err.to_string());
        }
    }
    buf.push('\n');
}

/// Logfmt format: `t=... lvl=... msg="..."` followed by the record attributes.
///
/// A caller tag is written as `caller=<file:line>` right after the message.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogfmtFormat;

impl LogfmtFormat {
    pub fn new() -> Self {
        Self
    }
}

impl Format for LogfmtFormat {
    fn format(&self, record: &Record) -> Vec<u8> {
        let names = &record.key_names;
        let mut common = vec![
            Value::Str(names.time.to_string()),
            Value::Time(record.time),
            Value::Str(names.level.to_string()),
            Value::from(record.level),
            Value::Str(names.message.to_string()),
            Value::from(record.message.as_str()),
        ];
        if let Some(tag) = find_caller(&record.attrs) {
            common.push(Value::Str(CALLER_KEY.to_string()));
            common.push(Value::Caller(tag.clone()));
        }

        let mut buf = String::with_capacity(128);
        write_attrs(&mut buf, common.iter().chain(record.attrs.iter()), false);
        buf.into_bytes()
    }
}
