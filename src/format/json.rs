//! JSON format for machine processing

use super::logfmt::{MALFORMED_KEY, MALFORMED_NO_VALUE};
use super::value::{format_dump, format_json_value, format_logfmt_value};
use super::Format;
use crate::core::{Record, Value};
use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value as Json};

/// Reserved key for problems found while encoding a record
pub const ERROR_KEY: &str = "error";

/// Key collecting implicit error attributes
pub const ERRORS_KEY: &str = "errors";

/// Key of the caller tag
pub const CALLER_KEY: &str = "caller";

/// JSON object per record, keys sorted.
///
/// The default emits one compact object per line.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat {
    pretty: bool,
    line_separated: bool,
}

impl JsonFormat {
    pub fn new() -> Self {
        Self {
            pretty: false,
            line_separated: true,
        }
    }

    /// Indented output with four spaces
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Append a newline after every record
    #[must_use]
    pub fn with_line_separated(mut self, line_separated: bool) -> Self {
        self.line_separated = line_separated;
        self
    }

    fn to_object(record: &Record) -> Map<String, Json> {
        let mut props = Map::new();
        props.insert(
            record.key_names.time.to_string(),
            Json::String(record.time.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        );
        props.insert(
            record.key_names.level.to_string(),
            Json::String(record.level.as_str().to_string()),
        );
        props.insert(
            record.key_names.message.to_string(),
            Json::String(record.message.clone()),
        );

        let mut errors = Vec::new();
        let mut iter = record.attrs.iter();
        while let Some(slot) = iter.next() {
            let key = match slot {
                Value::Error(err) => {
                    errors.push(Json::String(err.to_string()));
                    continue;
                }
                Value::Dump(dump) => {
                    props.insert(dump.title().to_string(), Json::String(format_dump(dump)));
                    continue;
                }
                Value::Standalone(alone) => {
                    props.insert(alone.title.clone(), format_json_value(&alone.value));
                    continue;
                }
                Value::Caller(tag) => {
                    props.insert(CALLER_KEY.to_string(), Json::String(tag.0.clone()));
                    continue;
                }
                Value::Nil => continue,
                Value::Str(key) => key.clone(),
                other => {
                    props.insert(
                        ERROR_KEY.to_string(),
                        Json::String(format!(
                            "{} is not a string key",
                            format_logfmt_value(other)
                        )),
                    );
                    MALFORMED_KEY.to_string()
                }
            };
            let value = match iter.next() {
                Some(value) => format_json_value(value),
                None => Json::String(MALFORMED_NO_VALUE.to_string()),
            };
            props.insert(key, value);
        }
        if !errors.is_empty() {
            props.insert(ERRORS_KEY.to_string(), Json::Array(errors));
        }
        props
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl Format for JsonFormat {
    fn format(&self, record: &Record) -> Vec<u8> {
        let mut out = marshal_or_error(&Self::to_object(record), self.pretty);
        if self.line_separated {
            out.push(b'\n');
        }
        out
    }
}

fn marshal<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<Vec<u8>> {
    if !pretty {
        return serde_json::to_vec(value);
    }
    let mut buf = Vec::with_capacity(256);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Serialize `value`; on failure emit an object holding only the failure under `error`.
///
/// `JsonFormat` always hands over a string-keyed map, which cannot fail, so the
/// fallback only matters to callers serializing arbitrary values.
pub(crate) fn marshal_or_error<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Vec<u8> {
    match marshal(value, pretty) {
        Ok(bytes) => bytes,
        Err(err) => {
            let mut fallback = Map::new();
            fallback.insert(ERROR_KEY.to_string(), Json::String(err.to_string()));
            marshal(&fallback, pretty).unwrap_or_else(|_| b"{}".to_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::core::{CallerTag, LogLevel};
    use chrono::{TimeZone, Utc};

    fn encode(record: &Record) -> Json {
        let bytes = JsonFormat::new().format(record);
        assert_eq!(bytes.last(), Some(&b'\n'));
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_builtins_and_pairs() {
        let t = Utc.with_ymd_and_hms(2015, 11, 20, 1, 34, 22).unwrap();
        let record = Record::new(LogLevel::Error, "request failed", attrs!["status", 500, "ok", false])
            .with_time(t);
        let parsed = encode(&record);
        assert_eq!(parsed["t"], "2015-11-20T01:34:22Z");
        assert_eq!(parsed["lvl"], "eror");
        assert_eq!(parsed["msg"], "request failed");
        assert_eq!(parsed["status"], 500);
        assert_eq!(parsed["ok"], false);
    }

    #[test]
    fn test_keys_are_sorted() {
        let record = Record::new(LogLevel::Info, "m", attrs!["zeta", 1, "alpha", 2]);
        let text = String::from_utf8(JsonFormat::new().format(&record)).unwrap();
        let alpha = text.find("\"alpha\"").unwrap();
        let zeta = text.find("\"zeta\"").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn test_non_string_key_reported() {
        let record = Record::new(LogLevel::Info, "m", attrs![42, "v"]);
        let parsed = encode(&record);
        assert_eq!(parsed[ERROR_KEY], "42 is not a string key");
        assert_eq!(parsed[MALFORMED_KEY], "v");
    }

    #[test]
    fn test_trailing_key() {
        let record = Record::new(LogLevel::Info, "m", attrs!["orphan"]);
        assert_eq!(encode(&record)["orphan"], MALFORMED_NO_VALUE);
    }

    #[test]
    fn test_implicit_values() {
        let err = std::io::Error::other("boom");
        let record = Record::new(
            LogLevel::Warn,
            "m",
            attrs![
                err,
                Value::standalone("query", "SELECT 1"),
                Value::dump_titled("state", 3),
                CallerTag("src/lib.rs:9".to_string()),
            ],
        );
        let parsed = encode(&record);
        assert_eq!(parsed[ERRORS_KEY], serde_json::json!(["boom"]));
        assert_eq!(parsed["query"], "SELECT 1");
        assert_eq!(parsed["state"], "3\n");
        assert_eq!(parsed[CALLER_KEY], "src/lib.rs:9");
    }

    #[test]
    fn test_pretty_uses_four_spaces() {
        let record = Record::new(LogLevel::Info, "m", Vec::new());
        let format = JsonFormat::new().with_pretty(true).with_line_separated(false);
        let text = String::from_utf8(format.format(&record)).unwrap();
        assert!(text.contains("\n    \"lvl\": \"info\""));
        assert!(!text.ends_with('\n'));
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode value"))
        }
    }

    #[test]
    fn test_marshal_failure_degrades() {
        let bytes = marshal_or_error(&Unserializable, false);
        assert_eq!(bytes, br#"{"error":"cannot encode value"}"#.to_vec());
    }
}
