//! Conversion of attribute values to text and JSON

use crate::core::{Dump, Value};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::fmt::Write as _;

/// Fixed width timestamp layout used for `Value::Time`, e.g. `2015-11-20T01:34:22+0000`
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

pub fn format_time(time: &DateTime<Utc>) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Render one value as it appears on the right side of `key=value`
pub fn format_logfmt_value(value: &Value) -> String {
    match value {
        Value::Nil => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Uint(u) => u.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Str(s) => quote_string(s),
        Value::Time(t) => format_time(t),
        Value::Display(d) => escape_string(&d.to_string()).into_owned(),
        Value::Error(e) => escape_string(&e.to_string()).into_owned(),
        Value::Debug(d) => escape_string(&format!("{d:?}")).into_owned(),
        Value::Dump(d) => escape_string(&format!("{:?}", d.object)).into_owned(),
        Value::Standalone(s) => format_logfmt_value(&s.value),
        Value::Caller(c) => escape_string(&c.0).into_owned(),
    }
}

/// Double-quote `s`, escaping quotes, backslashes and control characters
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Logfmt escaping for free-form text.
///
/// Text is quoted when it holds a char `<= ' '`, `=` or `"`, and escaped when
/// it holds `\`, `"`, `\n`, `\r` or `\t`. Text that needs escaping but no
/// quoting keeps its escape sequences without the surrounding quotes.
pub fn escape_string(s: &str) -> Cow<'_, str> {
    let mut needs_quotes = false;
    let mut needs_escape = false;
    for c in s.chars() {
        if c <= ' ' || c == '=' || c == '"' {
            needs_quotes = true;
        }
        if matches!(c, '\\' | '"' | '\n' | '\r' | '\t') {
            needs_escape = true;
        }
    }
    if !needs_quotes && !needs_escape {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 2);
    if needs_quotes {
        out.push('"');
    }
    for c in s.chars() {
        match c {
            '\\' | '"' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    if needs_quotes {
        out.push('"');
    }
    Cow::Owned(out)
}

/// Render one value as a JSON scalar
pub fn format_json_value(value: &Value) -> serde_json::Value {
    use serde_json::Value as Json;

    match value {
        Value::Nil => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => Json::from(*i),
        Value::Uint(u) => Json::from(*u),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(Json::Number)
            .unwrap_or_else(|| Json::String(f.to_string())),
        Value::Str(s) => Json::String(s.clone()),
        Value::Time(t) => Json::String(format_time(t)),
        Value::Display(d) => Json::String(d.to_string()),
        Value::Error(e) => Json::String(e.to_string()),
        Value::Debug(d) => Json::String(format!("{d:?}")),
        Value::Dump(d) => Json::String(format_dump(d)),
        Value::Standalone(s) => format_json_value(&s.value),
        Value::Caller(c) => Json::String(c.0.clone()),
    }
}

/// Verbose multi-line dump of a wrapped object, newline terminated
pub fn format_dump(dump: &Dump) -> String {
    let mut out = format!("{:#?}", dump.object);
    out.push('\n');
    out
}
